//! Error types for directory listing

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ListError>;

/// Failures that affect a single path during a listing.
///
/// None of these abort a run: the traversal reports them and moves on to the
/// next operand or sibling. Owner/group lookup failures never show up here,
/// they fall back to the `"unknown"` name instead.
#[derive(Debug, Error)]
pub enum ListError {
    /// A root operand could not be stat-ed.
    #[error("cannot access '{}': {}", .path.display(), reason(.source))]
    NotFound { path: PathBuf, source: io::Error },

    /// A directory exists but its contents could not be read.
    #[error("cannot open directory '{}': {}", .path.display(), reason(.source))]
    Unreadable { path: PathBuf, source: io::Error },

    /// Metadata for a single entry could not be read.
    #[error("cannot stat '{}': {}", .path.display(), reason(.source))]
    Metadata { path: PathBuf, source: io::Error },
}

impl ListError {
    pub fn not_found(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::NotFound {
            path: path.into(),
            source,
        }
    }

    pub fn unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Unreadable {
            path: path.into(),
            source,
        }
    }

    pub fn metadata(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Metadata {
            path: path.into(),
            source,
        }
    }

    /// The path this error is about.
    pub fn path(&self) -> &Path {
        match self {
            ListError::NotFound { path, .. }
            | ListError::Unreadable { path, .. }
            | ListError::Metadata { path, .. } => path,
        }
    }
}

/// Human-readable reason for an I/O error, without the `(os error N)` suffix.
fn reason(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => "No such file or directory".to_string(),
        io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
        _ => {
            let text = err.to_string();
            match text.find(" (os error") {
                Some(idx) => text[..idx].to_string(),
                None => text,
            }
        }
    }
}
