use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that stop a run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("I/O error on '{}': {}", .path.display(), .source)]
    PathIo { path: PathBuf, source: io::Error },

    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("{0}")]
    Message(String),
}

impl Error {
    pub(crate) fn at(path: &Path, source: io::Error) -> Self {
        Error::PathIo {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Outcome of a single input file that did not produce output.
///
/// `NotFound` and `Parse` are recoverable: the batch driver records them and
/// moves on. `Fatal` wraps everything else and aborts the batch.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("File '{}' not found.", .path.display())]
    NotFound { path: PathBuf },

    #[error("Error parsing JSON file '{}': {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Fatal(#[from] Error),
}

impl FileError {
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, FileError::Fatal(_))
    }
}

pub type Result<T> = core::result::Result<T, Error>;
