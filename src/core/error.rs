use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("target already exists: {0}")]
    TargetExists(String),

    #[error("failed to rename {from:?} to {to:?}: {source}")]
    RenameFailed {
        from: String,
        to: String,
        #[source]
        source: io::Error,
    },

    #[error(
        "failed to rename to {target:?}: {rename_error}; \
         restoring {original:?} also failed: {restore_error}"
    )]
    RestoreFailed {
        original: String,
        target: String,
        rename_error: io::Error,
        restore_error: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::NotFound(_) => "PATH_NOT_FOUND",
            Error::TargetExists(_) => "TARGET_EXISTS",
            Error::RenameFailed { .. } => "RENAME_FAILED",
            Error::RestoreFailed { .. } => "RESTORE_FAILED",
            Error::Io(_) => "IO_ERROR",
        }
    }
}
