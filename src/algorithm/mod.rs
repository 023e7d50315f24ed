//! # Arithmetic on sparse matrices
//!
//! Every operation reads its two operands and produces a new matrix. Work is proportional to the
//! number of stored values, except for the naive multiplication which visits every cell of the
//! result.
use std::fmt;

use thiserror::Error as ThisError;
use tracing::debug;

use crate::data::element::Element;
use crate::data::matrix::{Coordinate, SparseMatrix};

pub use elementwise::{add, subtract};
pub use multiply::{Strategy, multiply, multiply_optimal, multiply_slow};

pub mod elementwise;
pub mod multiply;

/// An operation on two matrices.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Operation {
    /// `A + B`
    Addition,
    /// `A - B`
    Subtraction,
    /// `A * B`, computed with the given strategy.
    Multiplication(Strategy),
}

impl Operation {
    /// Apply this operation to `left` and `right`, in that order.
    ///
    /// # Errors
    ///
    /// When the dimensions of the operands don't fit this operation, or when a value overflows.
    pub fn apply<F: Element>(
        self,
        left: &SparseMatrix<F>,
        right: &SparseMatrix<F>,
    ) -> Result<SparseMatrix<F>, Error> {
        let result = match self {
            Operation::Addition => add(left, right),
            Operation::Subtraction => subtract(left, right),
            Operation::Multiplication(strategy) => multiply(left, right, strategy),
        }?;

        debug!(
            operation = %self,
            left = %Shape::of(left),
            right = %Shape::of(right),
            nnz = result.nnz(),
            "applied operation",
        );
        Ok(result)
    }

    /// Title of the result of this operation, given names of the left and right operand.
    ///
    /// # Example
    ///
    /// ```
    /// use spmat::algorithm::Operation;
    ///
    /// assert_eq!(Operation::Subtraction.describe("a", "b"), "Subtraction of b from a");
    /// ```
    pub fn describe(self, left: &str, right: &str) -> String {
        match self {
            Operation::Addition => format!("Addition of {left} and {right}"),
            Operation::Subtraction => format!("Subtraction of {right} from {left}"),
            Operation::Multiplication(_) => format!("Multiplication of {left} and {right}"),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Addition => f.write_str("addition"),
            Operation::Subtraction => f.write_str("subtraction"),
            Operation::Multiplication(strategy) => write!(f, "{strategy} multiplication"),
        }
    }
}

/// Dimensions of a matrix, for error reporting.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Shape {
    /// Number of rows.
    pub nr_rows: usize,
    /// Number of columns.
    pub nr_columns: usize,
}

impl Shape {
    /// Dimensions of `matrix`.
    pub fn of<F: Element>(matrix: &SparseMatrix<F>) -> Self {
        Self { nr_rows: matrix.nr_rows(), nr_columns: matrix.nr_columns() }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.nr_rows, self.nr_columns)
    }
}

/// Reasons an operation can't produce a result.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    /// The dimensions of the operands don't fit the operation.
    #[error("{operation} of a {left} and a {right} matrix: {}", requirement(.operation))]
    DimensionMismatch {
        /// Operation that was attempted.
        operation: Operation,
        /// Dimensions of the left operand.
        left: Shape,
        /// Dimensions of the right operand.
        right: Shape,
    },
    /// A value didn't fit in the element type.
    #[error("{operation} overflowed while computing the value at {coordinate}")]
    Overflow {
        /// Operation that was attempted.
        operation: Operation,
        /// Coordinate of the result value being computed.
        coordinate: Coordinate,
    },
}

fn requirement(operation: &Operation) -> &'static str {
    match operation {
        Operation::Addition | Operation::Subtraction => {
            "both matrices need the same number of rows and columns"
        }
        Operation::Multiplication(_) => {
            "the column count of the first matrix needs to equal the row count of the second"
        }
    }
}
