use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::sync::RwLock;
use tracing::debug;

use crate::document::{BookDto, CatalogDocument};
use crate::error::{StorageCause, StoreError, StoreResult};
use crate::traits::DocumentStore;

/// JSON-file document store.
///
/// The catalog is one JSON document at a fixed path. Saves never modify the
/// document in place: the new contents are written to a temporary file in the
/// same directory, synced, and renamed over the old document, so a reader sees
/// either the previous document or the new one.
///
/// The blocking write task owns the store's write guard until the rename is
/// done, and loads take the read side. A save whose future is dropped midway
/// therefore still finishes before any later load through this store (or a
/// clone of it) reads the file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    io_lock: Arc<RwLock<()>>,
}

impl JsonFileStore {
    /// Create a store for the document at `path`.
    ///
    /// The file does not need to exist; it is created by the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io_lock: Arc::new(RwLock::new(())),
        }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_error(&self, source: impl Into<StorageCause>) -> StoreError {
        StoreError::Read {
            path: self.path.clone(),
            source: source.into(),
        }
    }

    fn write_error(&self, source: impl Into<StorageCause>) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source: source.into(),
        }
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load(&self) -> StoreResult<Vec<BookDto>> {
        let _reading = self.io_lock.read().await;
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no catalog document yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.read_error(e)),
        };

        let document = CatalogDocument::from_json(&bytes).map_err(|e| self.read_error(e))?;
        debug!(path = %self.path.display(), books = document.len(), "loaded catalog document");
        Ok(document.into_books())
    }

    async fn save(&self, books: Vec<BookDto>) -> StoreResult<()> {
        let count = books.len();
        let bytes = CatalogDocument::new(books)
            .to_json()
            .map_err(|e| self.write_error(e))?;

        let writing = Arc::clone(&self.io_lock).write_owned().await;
        let path = self.path.clone();
        let task = tokio::task::spawn_blocking(move || {
            let _writing = writing;
            replace_file(&path, &bytes)
        });
        task.await
            .map_err(|e| self.write_error(StorageCause::Task(e.to_string())))?
            .map_err(|e| self.write_error(e))?;

        debug!(path = %self.path.display(), books = count, "saved catalog document");
        Ok(())
    }
}

/// Atomically replace `path` with `bytes` via a synced sibling temp file.
fn replace_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
