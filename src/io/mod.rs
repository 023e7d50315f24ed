//! # Reading and writing of matrices
//!
//! This module provides read and write functionality for the matrix text format, see `text`.
use std::fs::{self, File};
use std::io::{self as std_io, BufWriter, ErrorKind, Write};
use std::path::Path;

use tracing::debug;

use crate::data::element::Element;
use crate::data::matrix::SparseMatrix;
use crate::io::error::{Export, Import};
use crate::io::text::EntryOrder;

pub mod error;
pub mod text;

/// Import a matrix from a file.
///
/// # Errors
///
/// When the file cannot be found or read, or when its header lines are malformed.
pub fn load<F: Element>(path: impl AsRef<Path>) -> Result<SparseMatrix<F>, Import> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Import::FileNotFound { path: path.to_path_buf(), source },
        _ => Import::IO { path: path.to_path_buf(), source },
    })?;

    let matrix = text::parse(&contents)?;
    debug!(path = %path.display(), nnz = matrix.nnz(), "loaded matrix");

    Ok(matrix)
}

/// Write a matrix to a file, entries in the default order.
///
/// The file is created or truncated. Its directory should already exist.
///
/// # Errors
///
/// When the file could not be created or written.
pub fn save<F: Element>(matrix: &SparseMatrix<F>, path: impl AsRef<Path>) -> Result<(), Export> {
    save_with_order(matrix, path, EntryOrder::default())
}

/// Write a matrix to a file, entries in the given order.
///
/// # Errors
///
/// When the file could not be created or written.
pub fn save_with_order<F: Element>(
    matrix: &SparseMatrix<F>,
    path: impl AsRef<Path>,
    order: EntryOrder,
) -> Result<(), Export> {
    let path = path.as_ref();

    write_to(matrix, path, order).map_err(|source| Export { path: path.to_path_buf(), source })?;
    debug!(path = %path.display(), nnz = matrix.nnz(), ?order, "saved matrix");

    Ok(())
}

fn write_to<F: Element>(
    matrix: &SparseMatrix<F>,
    path: &Path,
    order: EntryOrder,
) -> std_io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write!(writer, "{}", matrix.render(order))?;
    writer.flush()
}
