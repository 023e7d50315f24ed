//! # Matrix elements
//!
//! Values stored in a sparse matrix are fixed-width signed integers. All arithmetic on them goes
//! through the checked operations of `num_traits`, so that an overflow surfaces as an error rather
//! than as a wrapped or panicking value.
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use num_traits::{CheckedNeg, PrimInt, Signed};

/// Element of a `SparseMatrix`.
///
/// Implemented for all of `i8`, `i16`, `i32`, `i64`, `i128` and `isize`.
pub trait Element:
    PrimInt +
    Signed +
    CheckedNeg +
    FromStr +
    Hash +
    Display +
    Debug +
{
}

impl<T> Element for T
where
    T: PrimInt + Signed + CheckedNeg + FromStr + Hash + Display + Debug,
{
}
