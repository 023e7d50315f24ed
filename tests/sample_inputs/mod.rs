//! # Hand written matrix files
//!
//! Small matrices in the text format, some of them with deliberately malformed lines.
use std::path::{Path, PathBuf};

/// # Loading, saving and computing
mod test;

/// Relative path of the folder where the matrix files are stored.
///
/// The path is relative to the project root folder.
fn matrix_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Compute the path of the matrix file, based on the matrix name.
///
/// # Arguments
///
/// * `name`: Matrix name without extension.
///
/// # Return value
///
/// File path relative to the project root folder.
fn get_test_file_path(name: &str) -> PathBuf {
    matrix_file_directory().join(name).with_extension("txt")
}
