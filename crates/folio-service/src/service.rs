use folio_store::DocumentStore;
use folio_types::{cmp_ignore_case, contains_ignore_case, Book};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{CatalogError, CatalogResult};
use crate::mapper;

/// Domain operations over a whole-document catalog.
///
/// Each call performs its own load and/or save against the store; no
/// document is held between calls.
///
/// Mutations (`add`, `replace_all`) issued through the same service are
/// serialized by an internal async mutex, so tasks sharing one service never
/// drop each other's appends. Nothing coordinates separate services or
/// processes writing the same document: an `add` racing with another writer
/// can still lose a record, because both load before either saves.
///
/// Dropping a mutation future releases the mutex at once. Stores must not let
/// a later load overtake a save they have already started; [`JsonFileStore`]
/// holds its own write guard until the rename completes.
///
/// [`JsonFileStore`]: folio_store::JsonFileStore
pub struct CatalogService<S> {
    store: S,
    write_lock: Mutex<()>,
}

impl<S: DocumentStore> CatalogService<S> {
    /// Create a service backed by `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// The backing document store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// All books in stored order. An empty catalog yields an empty list.
    pub async fn get_all(&self) -> CatalogResult<Vec<Book>> {
        let books = self.store.load().await?;
        Ok(books.into_iter().map(mapper::to_book).collect())
    }

    /// Append `book` to the end of the catalog.
    pub async fn add(&self, book: Book) -> CatalogResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut books = self.store.load().await?;
        books.push(mapper::to_dto(book));
        let count = books.len();
        self.store.save(books).await?;

        info!(books = count, "added book to catalog");
        Ok(())
    }

    /// Replace the whole catalog with `books`.
    ///
    /// This is an unconditional overwrite, not a merge. An empty list leaves
    /// an empty catalog.
    pub async fn replace_all(&self, books: Vec<Book>) -> CatalogResult<()> {
        let books: Vec<_> = books.into_iter().map(mapper::to_dto).collect();
        let count = books.len();

        let _guard = self.write_lock.lock().await;
        self.store.save(books).await?;

        info!(books = count, "replaced catalog");
        Ok(())
    }

    /// Books whose title contains `key`, ignoring case, in stored order.
    ///
    /// Only titles are matched. An empty or whitespace-only key is rejected
    /// with [`CatalogError::InvalidArgument`] before the store is touched.
    pub async fn search(&self, key: &str) -> CatalogResult<Vec<Book>> {
        if key.trim().is_empty() {
            return Err(CatalogError::InvalidArgument(
                "search key must not be empty or whitespace".into(),
            ));
        }

        let books = self.get_all().await?;
        let matches: Vec<_> = books
            .into_iter()
            .filter(|book| contains_ignore_case(&book.title, key))
            .collect();

        debug!(key, matches = matches.len(), "searched catalog");
        Ok(matches)
    }

    /// All books ordered by author, then title, both ignoring case.
    ///
    /// The sort is stable: books with equal author and title keep their
    /// stored relative order.
    pub async fn get_sorted(&self) -> CatalogResult<Vec<Book>> {
        let mut books = self.get_all().await?;
        books.sort_by(|a, b| {
            cmp_ignore_case(&a.author, &b.author).then_with(|| cmp_ignore_case(&a.title, &b.title))
        });
        Ok(books)
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for CatalogService<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("store", &self.store)
            .finish()
    }
}
