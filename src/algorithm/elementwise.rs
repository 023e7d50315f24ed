//! # Addition and subtraction
//!
//! Both operations combine the values at the union of the stored coordinates of the operands. A
//! coordinate stored in neither operand stays zero, so it is never visited.
use crate::algorithm::{Error, Operation, Shape};
use crate::data::element::Element;
use crate::data::matrix::SparseMatrix;

/// Compute `left + right`.
///
/// # Errors
///
/// When the operands don't have the same dimensions, or when a sum overflows.
pub fn add<F: Element>(
    left: &SparseMatrix<F>,
    right: &SparseMatrix<F>,
) -> Result<SparseMatrix<F>, Error> {
    combine(Operation::Addition, left, right, F::checked_add, |&value| Some(value))
}

/// Compute `left - right`.
///
/// Values stored only in `right` are negated.
///
/// # Errors
///
/// When the operands don't have the same dimensions, or when a difference overflows.
pub fn subtract<F: Element>(
    left: &SparseMatrix<F>,
    right: &SparseMatrix<F>,
) -> Result<SparseMatrix<F>, Error> {
    combine(Operation::Subtraction, left, right, F::checked_sub, F::checked_neg)
}

/// Combine two matrices of equal dimensions value by value.
///
/// # Arguments
///
/// * `both`: Combines a value of `left` with the value of `right` at the same coordinate. The
/// latter may be zero.
/// * `right_only`: Maps a value of `right` at a coordinate where `left` stores nothing.
fn combine<F: Element>(
    operation: Operation,
    left: &SparseMatrix<F>,
    right: &SparseMatrix<F>,
    both: impl Fn(&F, &F) -> Option<F>,
    right_only: impl Fn(&F) -> Option<F>,
) -> Result<SparseMatrix<F>, Error> {
    if left.dimensions() != right.dimensions() {
        return Err(Error::DimensionMismatch {
            operation,
            left: Shape::of(left),
            right: Shape::of(right),
        });
    }

    let mut result = SparseMatrix::zeros(left.nr_rows(), left.nr_columns());

    for (&coordinate, value) in left {
        let combined = both(value, &right.get(coordinate))
            .ok_or(Error::Overflow { operation, coordinate })?;
        result.set(coordinate, combined);
    }

    for (&coordinate, value) in right {
        if left.contains(&coordinate) {
            continue;
        }

        let mapped = right_only(value).ok_or(Error::Overflow { operation, coordinate })?;
        result.set(coordinate, mapped);
    }

    Ok(result)
}

#[cfg(test)]
mod test {
    use super::*;

    fn a() -> SparseMatrix {
        SparseMatrix::from_entries(3, 3, [(0, 0, 1), (0, 2, -4), (1, 1, 5), (2, 0, 7)])
    }

    fn b() -> SparseMatrix {
        SparseMatrix::from_entries(3, 3, [(0, 0, 2), (0, 2, 4), (2, 1, -3)])
    }

    #[test]
    fn addition() {
        let sum = add(&a(), &b()).unwrap();

        assert_eq!(
            sum,
            SparseMatrix::from_entries(3, 3, [(0, 0, 3), (1, 1, 5), (2, 0, 7), (2, 1, -3)]),
        );
        // (0, 2) summed to zero and is not stored
        assert_eq!(sum.nnz(), 4);
    }

    #[test]
    fn addition_commutes() {
        assert_eq!(add(&a(), &b()).unwrap(), add(&b(), &a()).unwrap());
    }

    #[test]
    fn addition_identity() {
        let zero = SparseMatrix::zeros(3, 3);

        assert_eq!(add(&a(), &zero).unwrap(), a());
        assert_eq!(add(&zero, &a()).unwrap(), a());
    }

    #[test]
    fn subtraction() {
        let difference = subtract(&a(), &b()).unwrap();

        assert_eq!(
            difference,
            SparseMatrix::from_entries(
                3,
                3,
                [(0, 0, -1), (0, 2, -8), (1, 1, 5), (2, 0, 7), (2, 1, 3)],
            ),
        );
    }

    #[test]
    fn subtraction_negates_right_only_values() {
        let zero = SparseMatrix::zeros(3, 3);
        let negated = subtract(&zero, &a()).unwrap();

        for (&coordinate, &value) in &a() {
            assert_eq!(negated.get(coordinate), -value);
        }
        assert_eq!(negated.nnz(), a().nnz());
    }

    #[test]
    fn subtract_self_is_empty() {
        let difference = subtract(&a(), &a()).unwrap();

        assert!(difference.is_empty());
        assert_eq!(difference.dimensions(), (3, 3));
    }

    #[test]
    fn operands_unchanged() {
        let (left, right) = (a(), b());
        add(&left, &right).unwrap();
        subtract(&left, &right).unwrap();

        assert_eq!(left, a());
        assert_eq!(right, b());
    }

    #[test]
    fn dimension_mismatch() {
        let wide = SparseMatrix::<i64>::from_entries(2, 3, [(0, 0, 1)]);
        let tall = SparseMatrix::<i64>::from_entries(3, 2, [(0, 0, 1)]);

        for (left, right) in [(&wide, &tall), (&tall, &wide)] {
            assert!(matches!(add(left, right), Err(Error::DimensionMismatch { .. })));
            assert!(matches!(subtract(left, right), Err(Error::DimensionMismatch { .. })));
        }

        let other_rows = SparseMatrix::<i64>::zeros(3, 3);
        assert!(matches!(
            add(&wide, &other_rows),
            Err(Error::DimensionMismatch {
                operation: Operation::Addition,
                left: Shape { nr_rows: 2, nr_columns: 3 },
                right: Shape { nr_rows: 3, nr_columns: 3 },
            }),
        ));
    }

    #[test]
    fn overflow() {
        let big = SparseMatrix::<i8>::from_entries(1, 2, [(0, 0, 100), (0, 1, 1)]);
        let minimum = SparseMatrix::<i8>::from_entries(1, 2, [(0, 1, i8::MIN)]);

        assert!(matches!(add(&big, &big), Err(Error::Overflow { operation: Operation::Addition, .. })));
        // -(-128) does not fit
        assert!(matches!(
            subtract(&SparseMatrix::zeros(1, 2), &minimum),
            Err(Error::Overflow { .. }),
        ));
        assert_eq!(
            add(&big, &minimum).unwrap(),
            SparseMatrix::from_entries(1, 2, [(0, 0, 100), (0, 1, -127)]),
        );
    }
}
