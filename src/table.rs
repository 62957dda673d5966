//! Truth table enumeration.
//!
//! A [`TruthTable`] holds one [`Assignment`] for every combination of input values,
//! in ascending order of the integer the inputs encode (most significant input first).
//!
//! # Examples
//!
//! ```
//! use truth_rs::table::TruthTable;
//!
//! let table = TruthTable::of(|a: bool, b: bool| a ^ b).unwrap();
//! assert_eq!(table.len(), 4);
//! assert_eq!(table.row(1).unwrap().to_vec(), vec![false, true, true]);
//! assert_eq!(table.row(2).unwrap().to_vec(), vec![true, false, true]);
//! assert_eq!(table.sat_count(), 2);
//! ```

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::function::BooleanFn;
use crate::types::{encode, Assignment};

/// Largest arity accepted by the enumerator.
pub const MAX_ARITY: usize = 30;

/// Complete enumeration of a boolean function over all its inputs.
///
/// # Invariants
///
/// - There are exactly `2^arity` rows
/// - Row `i` has index `i`, so rows are sorted by the integer their inputs encode
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TruthTable {
    arity: usize,
    rows: Vec<Assignment>,
}

/// Builds the truth table of `f`, inferring the arity from its signature.
///
/// Shorthand for [`TruthTable::of`].
pub fn generate_table<Args>(f: impl BooleanFn<Args>) -> Result<TruthTable> {
    TruthTable::of(f)
}

impl TruthTable {
    /// Builds the truth table of `f`, inferring the arity from its signature.
    ///
    /// ```
    /// use truth_rs::table::TruthTable;
    ///
    /// let table = TruthTable::of(|a: bool, b: bool, c: bool| a ^ b ^ c).unwrap();
    /// assert_eq!(table.arity(), 3);
    /// assert_eq!(table.row(3).unwrap().to_vec(), vec![false, true, true, false]);
    ///
    /// let constant = TruthTable::of(|| true).unwrap();
    /// assert_eq!(constant.len(), 1);
    /// ```
    pub fn of<Args>(f: impl BooleanFn<Args>) -> Result<Self> {
        let arity = f.arity();
        Self::generate(arity, |inputs| f.eval(inputs))
    }

    /// Builds the truth table of an `arity`-input function taking its inputs as a slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooManyVariables`] if `arity > MAX_ARITY`.
    pub fn generate(arity: usize, f: impl Fn(&[bool]) -> bool) -> Result<Self> {
        Self::try_generate(arity, |inputs| Ok::<_, Error>(f(inputs)))
    }

    /// Builds the truth table of a fallible function.
    ///
    /// Enumeration stops at the first error, which is returned as is.
    /// No partial table is produced.
    ///
    /// ```
    /// use truth_rs::error::Error;
    /// use truth_rs::table::TruthTable;
    ///
    /// #[derive(Debug)]
    /// enum MyError {
    ///     Undefined(usize),
    ///     Table(Error),
    /// }
    ///
    /// impl From<Error> for MyError {
    ///     fn from(e: Error) -> Self {
    ///         MyError::Table(e)
    ///     }
    /// }
    ///
    /// let res = TruthTable::try_generate(2, |inputs| match inputs {
    ///     [true, true] => Err(MyError::Undefined(3)),
    ///     [a, b] => Ok(*a || *b),
    ///     _ => unreachable!(),
    /// });
    /// assert!(matches!(res, Err(MyError::Undefined(3))));
    /// ```
    pub fn try_generate<F, E>(arity: usize, mut f: F) -> Result<Self, E>
    where
        F: FnMut(&[bool]) -> Result<bool, E>,
        E: From<Error>,
    {
        if arity > MAX_ARITY {
            return Err(Error::TooManyVariables { arity, max: MAX_ARITY }.into());
        }

        let size = 1usize << arity;
        debug!("generate(arity = {}) -> {} rows", arity, size);

        let mut rows = Vec::with_capacity(size);
        let mut inputs = vec![false; arity];
        for index in 0..size {
            for (i, input) in inputs.iter_mut().enumerate() {
                *input = (index >> (arity - 1 - i)) & 1 == 1;
            }
            let output = f(&inputs)?;
            let row = Assignment::new(&inputs, output);
            trace!("row {}: {}", index, row);
            rows.push(row);
        }

        Ok(TruthTable { arity, rows })
    }

    /// Returns the number of inputs.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the number of rows, always `2^arity`.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// A table always has at least one row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Assignment] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Assignment> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.rows.iter()
    }

    /// Returns the output column.
    pub fn outputs(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(|row| row.output())
    }

    /// Returns the rows as `arity + 1`-wide vectors, output last.
    pub fn to_matrix(&self) -> Vec<Vec<bool>> {
        self.rows.iter().map(|row| row.to_vec()).collect()
    }

    /// Looks up the output for the given inputs.
    ///
    /// Returns `None` if `inputs.len()` differs from the arity.
    pub fn eval(&self, inputs: &[bool]) -> Option<bool> {
        if inputs.len() != self.arity {
            return None;
        }
        self.rows.get(encode(inputs)).map(|row| row.output())
    }

    /// Returns the number of rows on which the function is true.
    pub fn sat_count(&self) -> usize {
        self.outputs().filter(|&x| x).count()
    }

    /// Returns the rows on which the function is true.
    pub fn minterms(&self) -> impl Iterator<Item = &Assignment> + '_ {
        self.rows.iter().filter(|row| row.output())
    }

    /// Returns the rows on which the function is false.
    pub fn maxterms(&self) -> impl Iterator<Item = &Assignment> + '_ {
        self.rows.iter().filter(|row| !row.output())
    }

    pub fn is_tautology(&self) -> bool {
        self.outputs().all(|x| x)
    }

    pub fn is_contradiction(&self) -> bool {
        !self.is_satisfiable()
    }

    pub fn is_satisfiable(&self) -> bool {
        self.outputs().any(|x| x)
    }
}

impl<'a> IntoIterator for &'a TruthTable {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
