//! # Sparse matrix
//!
//! Only non-zero values are stored, keyed by their coordinate. Reading a coordinate that holds no
//! value yields zero, and writing a zero removes whatever was stored there.
use std::collections::HashMap;
use std::collections::hash_map::Iter;
use std::fmt;

use crate::data::element::Element;
use crate::io::text::{EntryOrder, Render};

/// Position of a value in a matrix. Indices start at `0`.
///
/// Ordering is row-major: first by row, then by column.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coordinate {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub column: usize,
}

impl Coordinate {
    /// Create a coordinate from a row and column index.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// A matrix of which only the non-zero values are stored, in a `HashMap` keyed by `Coordinate`.
///
/// The dimensions are fixed at creation. Stored coordinates are not checked against them: values
/// outside of the declared dimensions are kept, and can be listed with `out_of_bounds`.
///
/// Two matrices are equal when their dimensions are equal and they store the same values at the
/// same coordinates.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SparseMatrix<F = i64> {
    data: HashMap<Coordinate, F>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Element> SparseMatrix<F> {
    /// Create a matrix of zero's of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            data: HashMap::new(),
            nr_rows,
            nr_columns,
        }
    }

    /// Create a matrix from `(row, column, value)` triplets.
    ///
    /// The triplets are written in order, so when a coordinate appears more than once, the last
    /// value wins. Zero values erase earlier ones.
    pub fn from_entries<I>(nr_rows: usize, nr_columns: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, F)>,
    {
        let mut matrix = Self::zeros(nr_rows, nr_columns);
        for (row, column, value) in entries {
            matrix.set_element(row, column, value);
        }

        matrix
    }

    /// Get the value at coordinate (`row`, `column`), zero if nothing is stored there.
    pub fn get_element(&self, row: usize, column: usize) -> F {
        self.get(Coordinate::new(row, column))
    }

    /// Set the value at coordinate (`row`, `column`) to `value`.
    ///
    /// Setting a zero removes the stored value, if there is one.
    pub fn set_element(&mut self, row: usize, column: usize, value: F) {
        self.set(Coordinate::new(row, column), value);
    }

    /// Get the value at `coordinate`, zero if nothing is stored there.
    pub fn get(&self, coordinate: Coordinate) -> F {
        self.data.get(&coordinate).copied().unwrap_or_else(F::zero)
    }

    /// Set the value at `coordinate`, removing it when `value` is zero.
    pub fn set(&mut self, coordinate: Coordinate, value: F) {
        if value.is_zero() {
            self.data.remove(&coordinate);
        } else {
            self.data.insert(coordinate, value);
        }
    }

    /// Whether a (non-zero) value is stored at `coordinate`.
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.data.contains_key(coordinate)
    }

    /// Whether `coordinate` lies within the declared dimensions.
    pub fn is_in_bounds(&self, coordinate: &Coordinate) -> bool {
        coordinate.row < self.nr_rows && coordinate.column < self.nr_columns
    }

    /// Coordinates of stored values that lie outside of the declared dimensions.
    pub fn out_of_bounds(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.data.keys()
            .filter(|coordinate| !self.is_in_bounds(coordinate))
            .copied()
    }

    /// All stored values with their coordinates, in no particular order.
    pub fn iter(&self) -> Iter<'_, Coordinate, F> {
        self.data.iter()
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Get the dimensions as (rows, columns).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nr_rows, self.nr_columns)
    }

    /// Get the number of non-zero values in this matrix.
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// Whether no values are stored, i.e. the matrix is all zero.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Text representation with the entry lines in the given order.
    pub fn render(&self, order: EntryOrder) -> Render<'_, F> {
        Render::new(self, order)
    }
}

impl<'a, F> IntoIterator for &'a SparseMatrix<F> {
    type Item = (&'a Coordinate, &'a F);
    type IntoIter = Iter<'a, Coordinate, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Writes the text format, with entries in the default order.
impl<F: Element> fmt::Display for SparseMatrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.render(EntryOrder::default()), f)
    }
}
