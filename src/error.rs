//! Error kinds surfaced by a path length check

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a check before it completes.
///
/// Validation errors (`NoFolderSelected`, `InvalidLimit`, `RootNotFound`) are
/// raised before the filesystem is touched. An empty traversal is not an
/// error; see [`crate::scan::CheckOutcome::NoFiles`].
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Please select a folder first")]
    NoFolderSelected,

    #[error("Please enter a valid length greater than 0 (got {0})")]
    InvalidLimit(i64),

    #[error("Folder does not exist or is not a directory: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Permission denied while scanning {0}. Please check your folder permissions")]
    PermissionDenied(String),

    #[error("Failed to scan folder: {0}")]
    Traversal(#[source] ignore::Error),

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write archive {}: {source}", path.display())]
    ArchiveFailure {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Cannot archive {}: {source}", path.display())]
    ArchiveMember {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Check cancelled")]
    Cancelled,
}

impl CheckError {
    /// True for errors raised before any filesystem work began
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CheckError::NoFolderSelected | CheckError::InvalidLimit(_) | CheckError::RootNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
