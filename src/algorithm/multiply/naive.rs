//! # Naive multiplication
//!
//! Computes the inner product for every cell of the result, regardless of how many values are
//! stored. That is `O(rows(A) * columns(B) * columns(A))` lookups.
use crate::algorithm::{Error, Operation};
use crate::algorithm::multiply::{Strategy, check_inner_dimensions};
use crate::data::element::Element;
use crate::data::matrix::{Coordinate, SparseMatrix};

/// Compute `left * right` cell by cell.
///
/// Only coordinates within the declared dimensions take part in the product.
///
/// # Errors
///
/// When the column count of `left` differs from the row count of `right`, or when a product or
/// partial sum overflows.
pub fn multiply_slow<F: Element>(
    left: &SparseMatrix<F>,
    right: &SparseMatrix<F>,
) -> Result<SparseMatrix<F>, Error> {
    check_inner_dimensions(Strategy::Naive, left, right)?;

    let mut result = SparseMatrix::zeros(left.nr_rows(), right.nr_columns());
    for i in 0..left.nr_rows() {
        for j in 0..right.nr_columns() {
            let coordinate = Coordinate::new(i, j);
            let overflow = || Error::Overflow {
                operation: Operation::Multiplication(Strategy::Naive),
                coordinate,
            };

            let mut total = F::zero();
            for k in 0..left.nr_columns() {
                let product = left.get_element(i, k)
                    .checked_mul(&right.get_element(k, j))
                    .ok_or_else(overflow)?;
                total = total.checked_add(&product).ok_or_else(overflow)?;
            }

            result.set(coordinate, total);
        }
    }

    Ok(result)
}
