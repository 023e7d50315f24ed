//! # Sparse integer matrices
//!
//! Matrices of which only the non-zero values are stored, read from and written to a small line
//! based text format, and combined through addition, subtraction and multiplication.
//!
//! ```
//! use spmat::{Strategy, SparseMatrix, multiply, parse};
//!
//! let a: SparseMatrix = parse("rows=2\ncols=2\n(0, 0, 1)\n(0, 1, 2)\n(1, 0, 3)\n(1, 1, 4)\n")?;
//! let identity = SparseMatrix::from_entries(2, 2, [(0, 0, 1), (1, 1, 1)]);
//!
//! assert_eq!(multiply(&a, &identity, Strategy::Optimal)?, a);
//! # Ok::<(), spmat::Error>(())
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;
pub mod io;

pub use algorithm::{Operation, Strategy, add, multiply, multiply_optimal, multiply_slow, subtract};
pub use data::element::Element;
pub use data::matrix::{Coordinate, SparseMatrix};
pub use error::{Error, ErrorKind};
pub use io::{load, save, save_with_order};
pub use io::text::{EntryOrder, parse, render, render_with_order};
