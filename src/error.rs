//! # Errors of the library as a whole
//!
//! Wraps the errors of reading, writing and arithmetic, so that a caller driving all three can
//! use a single error type, and branch on its `kind` rather than on message text.
use thiserror::Error as ThisError;

use crate::algorithm;
use crate::io::error::{Export, Format, Import};

/// Any error this library can return.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A matrix could not be read.
    #[error(transparent)]
    Import(#[from] Import),
    /// A matrix could not be written.
    #[error(transparent)]
    Export(#[from] Export),
    /// An operation could not produce a result.
    #[error(transparent)]
    Arithmetic(#[from] algorithm::Error),
}

/// Coarse classification of an `Error`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// A matrix file has malformed headers.
    Format,
    /// The operands of an operation have incompatible dimensions.
    DimensionMismatch,
    /// A matrix file does not exist.
    FileNotFound,
    /// Anything else: other IO problems, or arithmetic overflow.
    Other,
}

impl From<Format> for Error {
    fn from(error: Format) -> Self {
        Error::Import(Import::Format(error))
    }
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Import(Import::Format(_)) => ErrorKind::Format,
            Error::Import(Import::FileNotFound { .. }) => ErrorKind::FileNotFound,
            Error::Arithmetic(algorithm::Error::DimensionMismatch { .. }) => {
                ErrorKind::DimensionMismatch
            }
            Error::Import(Import::IO { .. })
            | Error::Export(_)
            | Error::Arithmetic(algorithm::Error::Overflow { .. }) => ErrorKind::Other,
        }
    }
}
