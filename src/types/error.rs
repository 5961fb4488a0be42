//! Error types for contentcmp

use super::Side;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error types for comparison operations
///
/// Every I/O variant keeps the underlying [`io::Error`] untouched as its
/// `source()`. A differing result is never an error; see [`crate::Verdict`].
#[derive(Debug, Error)]
pub enum CompareError {
    /// A file could not be opened for reading
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Length query or rewind failed
    ///
    /// `path` is `None` for caller-supplied sources that have no name.
    #[error("cannot seek {}: {source}", seek_target(*side, path.as_deref()))]
    Seek {
        side: Side,
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    /// Reading a source failed for a reason other than end of input
    #[error("read error on {side} source: {source}")]
    Read {
        side: Side,
        #[source]
        source: io::Error,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

fn seek_target(side: Side, path: Option<&Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => format!("{} source", side),
    }
}

impl CompareError {
    /// The underlying I/O error, if this is an I/O failure
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            CompareError::Open { source, .. }
            | CompareError::Seek { source, .. }
            | CompareError::Read { source, .. } => Some(source),
            CompareError::Config(_) => None,
        }
    }

    /// Check if this error came from opening a file
    pub fn is_open_error(&self) -> bool {
        matches!(self, CompareError::Open { .. })
    }

    /// Check if this error came from a length query or rewind
    pub fn is_seek_error(&self) -> bool {
        matches!(self, CompareError::Seek { .. })
    }

    /// Check if this error came from reading content
    pub fn is_read_error(&self) -> bool {
        matches!(self, CompareError::Read { .. })
    }
}
