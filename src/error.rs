//! Error type shared by enumeration and rendering.

use std::fmt;
use std::io;

/// Errors produced while building or rendering a truth table.
#[derive(Debug)]
pub enum Error {
    /// The function has more inputs than can be enumerated.
    TooManyVariables { arity: usize, max: usize },
    /// The number of column labels does not match the width of a rendered row.
    ColumnCountMismatch { expected: usize, actual: usize },
    /// Writing to the output surface failed.
    Io(io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TooManyVariables { arity, max } => {
                write!(f, "Too many variables: arity {} exceeds the maximum of {}", arity, max)
            }
            Error::ColumnCountMismatch { expected, actual } => {
                write!(f, "Column count mismatch: expected {} labels, got {}", expected, actual)
            }
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_column_mismatch() {
        let e = Error::ColumnCountMismatch { expected: 4, actual: 2 };
        assert_eq!(e.to_string(), "Column count mismatch: expected 4 labels, got 2");
    }

    #[test]
    fn test_io_source() {
        let e = Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(matches!(e, Error::Io(_)));
        assert!(std::error::Error::source(&e).is_some());
    }
}
