//! # truth-rs: Truth tables in Rust
//!
//! **`truth-rs`** enumerates every input assignment of a boolean function and renders the
//! resulting truth table as formatted text.
//!
//! ## Key Features
//!
//! - **Arity from the signature**: any `Fn(bool, ..., bool) -> bool` (up to 8 inputs) or
//!   `Fn([bool; N]) -> bool` is accepted through the [`BooleanFn`][crate::function::BooleanFn]
//!   trait, with the number of inputs known at compile time.
//! - **Explicit arity**: [`TruthTable::generate`][crate::table::TruthTable::generate] takes the
//!   inputs as a slice for functions of any width up to [`MAX_ARITY`][crate::table::MAX_ARITY].
//! - **Fail-fast**: fallible functions go through
//!   [`TruthTable::try_generate`][crate::table::TruthTable::try_generate]; the first error is
//!   returned untouched and no partial table is built.
//! - **Configurable output**: column labels, title, row numbers, and the symbols for
//!   true/false are set through [`RenderConfig`][crate::render::RenderConfig].
//!
//! ## Basic Usage
//!
//! ```rust
//! use truth_rs::render::RenderConfig;
//! use truth_rs::table::TruthTable;
//!
//! // 1. Enumerate: rows are ordered by the integer the inputs encode, MSB first
//! let table = TruthTable::of(|a: bool, b: bool, c: bool| a ^ b ^ c).unwrap();
//! assert_eq!(table.len(), 8);
//! assert_eq!(table.row(7).unwrap().to_vec(), vec![true, true, true, true]);
//!
//! // 2. Render
//! let config = RenderConfig::default()
//!     .with_columns(["#", "a", "b", "c_in", "f(x)"])
//!     .with_title("F")
//!     .with_symbols("1", "0");
//! let text = table.render(&config).unwrap();
//! assert!(text.contains("c_in"));
//! ```
//!
//! ## Core Components
//!
//! - **[`table`]**: The enumerator. Contains [`TruthTable`][crate::table::TruthTable] and queries over it.
//! - **[`render`][mod@render]**: Text output of tables.
//! - **[`function`]**: Boolean functions with a statically known arity.

pub mod error;
pub mod function;
pub mod render;
pub mod table;
pub mod types;

pub use render::render;
pub use table::generate_table;
