//! Rows of a truth table.
//!
//! An [`Assignment`] pairs one combination of input values with the output of the
//! function on that combination. Inputs are ordered most-significant first, so the
//! inputs of row `i` spell out `i` in binary.
use std::fmt;

/// A single row of a truth table: `N` input values followed by the output.
///
/// # Invariants
///
/// - `index()` is the integer encoded by `inputs()`, most significant bit first
/// - The row is never mutated after construction
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Assignment {
    index: usize,
    // Inputs followed by the output, `arity + 1` values in total.
    values: Box<[bool]>,
}

impl Assignment {
    /// Creates a row from its inputs and the function output.
    ///
    /// The index is recomputed from the inputs.
    pub fn new(inputs: &[bool], output: bool) -> Self {
        let index = encode(inputs);
        let values = inputs.iter().copied().chain(std::iter::once(output)).collect();
        Assignment { index, values }
    }

    /// Returns the integer encoded by the inputs.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the number of inputs.
    pub fn arity(&self) -> usize {
        self.values.len() - 1
    }

    pub fn inputs(&self) -> &[bool] {
        &self.values[..self.arity()]
    }

    /// Returns the value of the `i`-th input (0-indexed, most significant first).
    pub fn input(&self, i: usize) -> Option<bool> {
        self.inputs().get(i).copied()
    }

    pub fn output(&self) -> bool {
        self.values[self.arity()]
    }

    /// Returns an iterator over all `arity + 1` values: inputs, then the output.
    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        self.values.iter().copied()
    }

    /// Returns the row as a vector of `arity + 1` values.
    pub fn to_vec(&self) -> Vec<bool> {
        self.values.to_vec()
    }
}

/// Encodes a sequence of bits as an integer, first bit most significant.
pub(crate) fn encode(bits: &[bool]) -> usize {
    bits.iter().fold(0, |acc, &bit| (acc << 1) | bit as usize)
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in self.inputs() {
            write!(f, "{}", bit as u8)?;
        }
        if self.arity() > 0 {
            write!(f, " ")?;
        }
        write!(f, "-> {}", self.output() as u8)
    }
}
