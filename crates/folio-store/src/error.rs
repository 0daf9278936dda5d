use std::io;
use std::path::{Path, PathBuf};

/// Errors from document store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The document exists but could not be read or parsed.
    #[error("failed to load catalog from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: StorageCause,
    },

    /// The document could not be written.
    #[error("failed to save catalog to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: StorageCause,
    },
}

impl StoreError {
    /// Path of the document the failed operation targeted.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }

    /// Returns `true` for load failures.
    pub fn is_read(&self) -> bool {
        matches!(self, Self::Read { .. })
    }

    /// Returns `true` for save failures.
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}

/// Underlying cause of a [`StoreError`].
#[derive(Debug, thiserror::Error)]
pub enum StorageCause {
    /// I/O error from the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document is not well-formed, or does not match the record schema.
    #[error("malformed document: {0}")]
    Format(#[from] serde_json::Error),

    /// The blocking write task panicked or was cancelled.
    #[error("write task failed: {0}")]
    Task(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_path_and_cause() {
        let err = StoreError::Read {
            path: PathBuf::from("/data/books.json"),
            source: StorageCause::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/books.json"));
        assert!(msg.contains("denied"));
        assert!(err.is_read());
        assert!(!err.is_write());
    }

    #[test]
    fn write_error_exposes_source() {
        use std::error::Error as _;

        let err = StoreError::Write {
            path: PathBuf::from("books.json"),
            source: StorageCause::Task("cancelled".into()),
        };
        assert!(err.is_write());
        assert_eq!(err.path(), Path::new("books.json"));
        assert!(err.source().is_some());
    }
}
