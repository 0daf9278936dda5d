use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::document::BookDto;
use crate::error::StoreResult;
use crate::traits::DocumentStore;

/// In-memory document store.
///
/// Intended for tests and embedding. The document is held behind a `RwLock`
/// and cloned on every load and save, so callers observe the same
/// whole-document semantics as the file store. Load and save calls are
/// counted, which lets tests check that an operation touched no storage.
pub struct InMemoryDocumentStore {
    books: RwLock<Vec<BookDto>>,
    loads: AtomicUsize,
    saves: AtomicUsize,
}

impl InMemoryDocumentStore {
    /// Create a store with no document.
    pub fn new() -> Self {
        Self::with_books(Vec::new())
    }

    /// Create a store seeded with an existing document.
    pub fn with_books(books: Vec<BookDto>) -> Self {
        Self {
            books: RwLock::new(books),
            loads: AtomicUsize::new(0),
            saves: AtomicUsize::new(0),
        }
    }

    /// Copy of the current document, without counting as a load.
    pub fn snapshot(&self) -> Vec<BookDto> {
        self.books.read().expect("lock poisoned").clone()
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.books.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the stored document is empty.
    pub fn is_empty(&self) -> bool {
        self.books.read().expect("lock poisoned").is_empty()
    }

    /// Number of `load` calls served so far.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Number of `save` calls served so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn load(&self) -> StoreResult<Vec<BookDto>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.snapshot())
    }

    async fn save(&self, books: Vec<BookDto>) -> StoreResult<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.books.write().expect("lock poisoned") = books;
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryDocumentStore")
            .field("book_count", &self.len())
            .field("loads", &self.load_count())
            .field("saves", &self.save_count())
            .finish()
    }
}
