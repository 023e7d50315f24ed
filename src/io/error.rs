//! # Error reporting for reading and writing of matrix files
//!
//! A collection of enums describing any problems encountered during reading, parsing and writing.
use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// An `Import` error is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy for reading.
#[derive(Debug, Error)]
pub enum Import {
    /// There is no file at the given path.
    #[error("file not found: {}", .path.display())]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying error, of kind `NotFound`.
        #[source]
        source: io::Error,
    },
    /// The file exists, but reading it couldn't start or was interrupted.
    #[error("could not read {}", .path.display())]
    IO {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// Contents of the file could not be parsed into a matrix.
    #[error(transparent)]
    Format(#[from] Format),
}

/// A `Format` error represents a syntactically incorrect header.
///
/// Entry lines never cause this error, malformed ones are skipped instead.
#[derive(Debug, Error)]
pub enum Format {
    /// The text ended before this header line.
    #[error("missing \"{key}=<integer>\" header line")]
    MissingHeader {
        /// Key of the missing header.
        key: &'static str,
    },
    /// The header line has no `=`.
    #[error("line {line_number}: header \"{line}\" is not of the form key=value")]
    MalformedHeader {
        /// Number of the line in the file, counting from 1.
        line_number: usize,
        /// The line itself.
        line: String,
    },
    /// The header line has a different key than expected at this position.
    #[error("line {line_number}: expected header \"{expected}\", found \"{found}\"")]
    UnexpectedKey {
        /// Number of the line in the file, counting from 1.
        line_number: usize,
        /// Key that should be at this line.
        expected: &'static str,
        /// Key that was read.
        found: String,
    },
    /// The value of the header line is not a non-negative integer.
    #[error("line {line_number}: could not read a dimension from \"{line}\"")]
    InvalidDimension {
        /// Number of the line in the file, counting from 1.
        line_number: usize,
        /// The line itself.
        line: String,
        /// Why the value could not be read.
        #[source]
        source: ParseIntError,
    },
}

/// An `Export` error is created when a matrix could not be written to a file.
#[derive(Debug, Error)]
#[error("could not write {}", .path.display())]
pub struct Export {
    /// Path that was written to.
    pub path: PathBuf,
    /// Underlying error.
    #[source]
    pub source: io::Error,
}

/// A `FileLocation` references a line in the file by the line number of the file as originally
/// read from the disk. It contains a reference to the line itself.
pub(crate) type FileLocation<'a> = (usize, &'a str);
