//! # Matrix multiplication
//!
//! Two strategies compute the same product. The naive one visits every cell of the result and is
//! kept as a reference. The optimal one only multiplies pairs of stored values that meet, see
//! `row_grouping`.
use std::fmt;

use crate::algorithm::{Error, Operation, Shape};
use crate::data::element::Element;
use crate::data::matrix::SparseMatrix;

pub use naive::multiply_slow;
pub use row_grouping::multiply_optimal;

mod naive;
mod row_grouping;

/// How a product is computed.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Strategy {
    /// Group the right operand by row, and only multiply values that meet.
    #[default]
    Optimal,
    /// Compute the inner product for every cell of the result.
    Naive,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Optimal => "optimal",
            Strategy::Naive => "naive",
        })
    }
}

/// Compute `left * right` with the given strategy.
///
/// # Errors
///
/// When the column count of `left` differs from the row count of `right`, or when a value
/// overflows.
pub fn multiply<F: Element>(
    left: &SparseMatrix<F>,
    right: &SparseMatrix<F>,
    strategy: Strategy,
) -> Result<SparseMatrix<F>, Error> {
    match strategy {
        Strategy::Optimal => multiply_optimal(left, right),
        Strategy::Naive => multiply_slow(left, right),
    }
}

/// Check that `left` and `right` can be multiplied, in that order.
fn check_inner_dimensions<F: Element>(
    strategy: Strategy,
    left: &SparseMatrix<F>,
    right: &SparseMatrix<F>,
) -> Result<(), Error> {
    if left.nr_columns() == right.nr_rows() {
        Ok(())
    } else {
        Err(Error::DimensionMismatch {
            operation: Operation::Multiplication(strategy),
            left: Shape::of(left),
            right: Shape::of(right),
        })
    }
}
