//! Error taxonomy for loading and saving fixlet files

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading, decoding, or writing fixlets
#[derive(Debug, Error)]
pub enum Error {
    /// The fixlet file does not exist
    #[error("fixlet file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Any other read or write failure
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// A data line did not split into the expected number of fields
    #[error("malformed record on line {line}: expected {expected} fields, found {found}")]
    MalformedRecord {
        /// 1-based line on which the record starts
        line: u64,
        /// Number of fields a fixlet row must have
        expected: usize,
        /// Number of fields actually present
        found: usize,
    },
}

impl Error {
    /// Map an I/O error raised while opening `path`, keeping absence distinct
    pub(crate) fn from_open(err: io::Error, path: impl Into<PathBuf>) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Self::NotFound(path.into())
        } else {
            Self::Io(err)
        }
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;
