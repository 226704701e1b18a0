//! Error types for directory tree construction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while building a directory tree.
///
/// Filtered-out entries are not errors; they resolve to an absent (`None`)
/// build result. Any variant here aborts the whole build: there is no retry
/// and no partial tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Metadata read failed: the entry is missing, inaccessible, or the
    /// underlying stat call errored.
    #[error("Failed to read metadata for {path:?}: {source}")]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Directory listing failed.
    #[error("Failed to list directory {path:?}: {source}")]
    ListDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl TreeError {
    /// The path the failing filesystem operation was issued against.
    pub fn path(&self) -> &PathBuf {
        match self {
            TreeError::Metadata { path, .. } => path,
            TreeError::ListDir { path, .. } => path,
        }
    }
}
