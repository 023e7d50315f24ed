//! # Matrix text format
//!
//! A matrix file starts with two header lines declaring the dimensions, followed by one line per
//! non-zero value:
//!
//! ```text
//! rows=3
//! cols=2
//! (0, 1, 5)
//! (2, 0, -4)
//! ```
//!
//! Reading is lenient about entry lines: a line that isn't a well-formed `(row, column, value)`
//! triplet is skipped, not rejected. The headers on the other hand are required.
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use tracing::debug;

use crate::data::element::Element;
use crate::data::matrix::{Coordinate, SparseMatrix};
use crate::io::error::{FileLocation, Format};
use crate::io::text::token::{
    COLUMNS, ENTRY_END, ENTRY_SEPARATOR, ENTRY_START, HEADER_SEPARATOR,
    LEXICOGRAPHIC_KEY_SEPARATOR, ROWS,
};

pub mod token;

/// Parse a matrix, in string form.
///
/// # Arguments
///
/// * `text`: Entire contents of a matrix file.
///
/// # Errors
///
/// When one of the two header lines is missing or malformed. Malformed entry lines are skipped
/// without an error.
pub fn parse<F: Element>(text: &str) -> Result<SparseMatrix<F>, Format> {
    let mut lines = into_lines(text);

    let mut non_blank = lines.by_ref().filter(|(_, line)| !line.trim().is_empty());
    let nr_rows = parse_header(non_blank.next(), ROWS)?;
    let nr_columns = parse_header(non_blank.next(), COLUMNS)?;

    let mut matrix = SparseMatrix::zeros(nr_rows, nr_columns);
    let mut skipped = 0;
    for (line_number, line) in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_entry(line) {
            Ok((row, column, value)) => matrix.set_element(row, column, value),
            Err(reason) => {
                debug!(line_number, line, %reason, "skipping entry line");
                skipped += 1;
            }
        }
    }

    debug!(nr_rows, nr_columns, nnz = matrix.nnz(), skipped, "parsed matrix");
    Ok(matrix)
}

/// Split a text into numbered lines, counting from 1.
fn into_lines(text: &str) -> impl Iterator<Item = FileLocation<'_>> {
    text.lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line))
}

/// Read the dimension from a `key=value` header line.
///
/// # Arguments
///
/// * `location`: The header line, `None` if the text ended before it.
/// * `key`: The key this header line should have.
fn parse_header(location: Option<FileLocation>, key: &'static str) -> Result<usize, Format> {
    let (line_number, line) = location.ok_or(Format::MissingHeader { key })?;

    let (found_key, value) = line.split_once(HEADER_SEPARATOR)
        .ok_or_else(|| Format::MalformedHeader { line_number, line: line.to_string() })?;

    let found_key = found_key.trim();
    if found_key != key {
        return Err(Format::UnexpectedKey {
            line_number,
            expected: key,
            found: found_key.to_string(),
        });
    }

    value.trim().parse().map_err(|source| Format::InvalidDimension {
        line_number,
        line: line.to_string(),
        source,
    })
}

/// Why an entry line was not read into the matrix.
#[derive(Debug, Eq, PartialEq)]
enum Skip {
    /// Not wrapped in parentheses.
    NotParenthesized,
    /// Not exactly a row, column and value.
    ComponentCount,
    /// One of the components isn't an integer of the right kind.
    NotAnInteger,
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Skip::NotParenthesized => "not enclosed in parentheses",
            Skip::ComponentCount => "does not have exactly three components",
            Skip::NotAnInteger => "component is not an integer",
        })
    }
}

/// Read a `(row, column, value)` line.
///
/// Rows and columns are indices, so negative ones count as malformed. That is the only bounds
/// check made here: indices beyond the declared dimensions are stored as they are, see
/// `SparseMatrix::out_of_bounds`.
fn parse_entry<F: Element>(line: &str) -> Result<(usize, usize, F), Skip> {
    let inner = line.strip_prefix(ENTRY_START)
        .and_then(|rest| rest.strip_suffix(ENTRY_END))
        .ok_or(Skip::NotParenthesized)?;

    let (row, column, value) = inner.split(ENTRY_SEPARATOR)
        .collect_tuple()
        .ok_or(Skip::ComponentCount)?;

    Ok((parse_component(row)?, parse_component(column)?, parse_component(value)?))
}

fn parse_component<T: FromStr>(text: &str) -> Result<T, Skip> {
    text.trim().parse().map_err(|_| Skip::NotAnInteger)
}

/// Order in which the entry lines of a matrix are written.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum EntryOrder {
    /// Ascending by the text `"<row>.<column>"`, compared character by character.
    ///
    /// This is not numeric: `(10, 0)` comes before `(2, 0)`, and `(1, 10)` before `(1, 2)`. It is
    /// the order of existing matrix files, so output stays byte-for-byte comparable with them.
    #[default]
    Lexicographic,
    /// Ascending by row, then by column.
    RowMajor,
}

impl EntryOrder {
    /// Collect the values of `matrix` in this order.
    pub fn sorted<F: Element>(self, matrix: &SparseMatrix<F>) -> Vec<(Coordinate, F)> {
        let entries = matrix.iter().map(|(&coordinate, &value)| (coordinate, value));

        match self {
            EntryOrder::Lexicographic => entries
                .sorted_by_cached_key(|(coordinate, _)| lexicographic_key(coordinate))
                .collect(),
            EntryOrder::RowMajor => entries
                .sorted_unstable_by_key(|&(coordinate, _)| coordinate)
                .collect(),
        }
    }
}

fn lexicographic_key(coordinate: &Coordinate) -> String {
    format!("{}{}{}", coordinate.row, LEXICOGRAPHIC_KEY_SEPARATOR, coordinate.column)
}

/// Text representation of a matrix, written lazily through `Display`.
///
/// Created by `SparseMatrix::render`.
pub struct Render<'a, F> {
    matrix: &'a SparseMatrix<F>,
    order: EntryOrder,
}

impl<'a, F> Render<'a, F> {
    pub(crate) fn new(matrix: &'a SparseMatrix<F>, order: EntryOrder) -> Self {
        Self { matrix, order }
    }
}

impl<F: Element> fmt::Display for Render<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}{}{}", ROWS, HEADER_SEPARATOR, self.matrix.nr_rows())?;
        writeln!(f, "{}{}{}", COLUMNS, HEADER_SEPARATOR, self.matrix.nr_columns())?;
        for (Coordinate { row, column }, value) in self.order.sorted(self.matrix) {
            writeln!(f, "{}{}, {}, {}{}", ENTRY_START, row, column, value, ENTRY_END)?;
        }

        Ok(())
    }
}

/// Text representation of a matrix, entries in the default order.
pub fn render<F: Element>(matrix: &SparseMatrix<F>) -> String {
    render_with_order(matrix, EntryOrder::default())
}

/// Text representation of a matrix, entries in the given order.
pub fn render_with_order<F: Element>(matrix: &SparseMatrix<F>, order: EntryOrder) -> String {
    matrix.render(order).to_string()
}
