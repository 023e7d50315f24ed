//! # Multiplication by row grouping
//!
//! The values of the right operand are bucketed by row. A value `A[i, k]` then only needs to meet
//! the values in bucket `k`: all other values of the right operand would be multiplied by a zero.
//! Coordinates of `A` whose column has no bucket are skipped entirely.
//!
//! The work is `O(nnz(A) * average bucket size)`, rather than the cube of the dimensions.
use std::collections::HashMap;

use itertools::Itertools;

use crate::algorithm::{Error, Operation};
use crate::algorithm::multiply::{Strategy, check_inner_dimensions};
use crate::data::element::Element;
use crate::data::matrix::{Coordinate, SparseMatrix};

/// Compute `left * right`, multiplying only stored values that meet.
///
/// The result is identical to that of `multiply_slow`, including whether it overflows. To that
/// end, stored values outside of the declared dimensions are ignored, just as the cell by cell
/// product never reaches them, and the values of `left` are visited by ascending column, so that
/// every sum is accumulated in the same order as the inner products of `multiply_slow`.
///
/// # Errors
///
/// When the column count of `left` differs from the row count of `right`, or when a product or
/// partial sum overflows.
pub fn multiply_optimal<F: Element>(
    left: &SparseMatrix<F>,
    right: &SparseMatrix<F>,
) -> Result<SparseMatrix<F>, Error> {
    check_inner_dimensions(Strategy::Optimal, left, right)?;

    let rows_of_right = group_by_row(right);

    let mut sums = HashMap::<Coordinate, F>::new();
    let in_order = left.iter()
        .filter(|(position, _)| left.is_in_bounds(position))
        .sorted_unstable_by_key(|(position, _)| position.column);
    for (&Coordinate { row: i, column: k }, &value) in in_order {
        // No value of the right operand in row k
        let Some(bucket) = rows_of_right.get(&k) else {
            continue;
        };

        for &(j, other) in bucket {
            let coordinate = Coordinate::new(i, j);
            let overflow = || Error::Overflow {
                operation: Operation::Multiplication(Strategy::Optimal),
                coordinate,
            };

            let product = value.checked_mul(&other).ok_or_else(overflow)?;
            let sum = sums.entry(coordinate).or_insert_with(F::zero);
            *sum = sum.checked_add(&product).ok_or_else(overflow)?;
        }
    }

    let mut result = SparseMatrix::zeros(left.nr_rows(), right.nr_columns());
    // Sums that cancelled out to zero are dropped here
    for (coordinate, sum) in sums {
        result.set(coordinate, sum);
    }

    Ok(result)
}

/// Bucket the in-bounds values of `matrix` by row: `row -> [(column, value)]`.
fn group_by_row<F: Element>(matrix: &SparseMatrix<F>) -> HashMap<usize, Vec<(usize, F)>> {
    matrix.iter()
        .filter(|(coordinate, _)| matrix.is_in_bounds(coordinate))
        .map(|(&Coordinate { row, column }, &value)| (row, (column, value)))
        .into_group_map()
}
