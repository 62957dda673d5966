//! Boolean functions with a statically known arity.
//!
//! [`BooleanFn`] lets the enumerator discover how many inputs a function takes from
//! its type alone, so a plain closure is enough to build a table:
//!
//! ```
//! use truth_rs::function::BooleanFn;
//!
//! let xor = |a: bool, b: bool| a ^ b;
//! assert_eq!(xor.arity(), 2);
//! assert_eq!(xor.eval(&[true, false]), true);
//!
//! let majority = |[a, b, c]: [bool; 3]| (a & b) | (a & c) | (b & c);
//! assert_eq!(majority.arity(), 3);
//! assert_eq!(majority.eval(&[true, false, true]), true);
//! ```
//!
//! The `Args` parameter only disambiguates the implementations; it is inferred from
//! the closure signature, so parameter types must be annotated.

/// A function from a fixed number of booleans to a boolean.
///
/// Implemented for every `Fn(bool, ..., bool) -> bool` with up to 8 parameters and
/// for every `Fn([bool; N]) -> bool`.
pub trait BooleanFn<Args> {
    /// Number of boolean inputs.
    fn arity(&self) -> usize;

    /// Evaluates the function on `inputs`.
    ///
    /// # Panics
    ///
    /// Panics if `inputs.len() != self.arity()`.
    fn eval(&self, inputs: &[bool]) -> bool;
}

macro_rules! bool_for {
    ($x:ident) => {
        bool
    };
}

macro_rules! impl_boolean_fn {
    ($n:literal => $($arg:ident),*) => {
        impl<F> BooleanFn<($(bool_for!($arg),)*)> for F
        where
            F: Fn($(bool_for!($arg)),*) -> bool,
        {
            fn arity(&self) -> usize {
                $n
            }

            fn eval(&self, inputs: &[bool]) -> bool {
                match *inputs {
                    [$($arg),*] => self($($arg),*),
                    _ => panic!("expected {} inputs, got {}", $n, inputs.len()),
                }
            }
        }
    };
}

impl_boolean_fn!(0 =>);
impl_boolean_fn!(1 => a);
impl_boolean_fn!(2 => a, b);
impl_boolean_fn!(3 => a, b, c);
impl_boolean_fn!(4 => a, b, c, d);
impl_boolean_fn!(5 => a, b, c, d, e);
impl_boolean_fn!(6 => a, b, c, d, e, f);
impl_boolean_fn!(7 => a, b, c, d, e, f, g);
impl_boolean_fn!(8 => a, b, c, d, e, f, g, h);

impl<F, const N: usize> BooleanFn<[bool; N]> for F
where
    F: Fn([bool; N]) -> bool,
{
    fn arity(&self) -> usize {
        N
    }

    fn eval(&self, inputs: &[bool]) -> bool {
        assert_eq!(inputs.len(), N, "expected {} inputs, got {}", N, inputs.len());
        self(std::array::from_fn(|i| inputs[i]))
    }
}
