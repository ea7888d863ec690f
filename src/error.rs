//! Error types for the directory walk.

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Result type alias using [`WalkError`].
pub type Result<T> = std::result::Result<T, WalkError>;

/// Every failure that can end a walk.
///
/// None of these are recoverable: the first one stops the walk, and output
/// already written to the sink is left as is.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The root path does not exist.
    #[error("{}: no such file or directory", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Directory iteration failed, e.g. a subdirectory became unreadable.
    #[error(transparent)]
    Traversal(#[from] walkdir::Error),

    /// A file selected for emission could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output sink rejected a write.
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

impl WalkError {
    /// Classify an iteration error, singling out a missing root.
    pub(crate) fn from_walk(err: walkdir::Error) -> Self {
        let missing_root = err.depth() == 0
            && err
                .io_error()
                .is_some_and(|io_err| io_err.kind() == io::ErrorKind::NotFound);

        match err.path().map(Path::to_path_buf) {
            Some(path) if missing_root => Self::NotFound { path, source: err },
            _ => Self::Traversal(err),
        }
    }
}
