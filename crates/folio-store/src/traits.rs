use async_trait::async_trait;

use crate::document::BookDto;
use crate::error::StoreResult;

/// Whole-document catalog store.
///
/// All implementations must satisfy these invariants:
/// - `load` returns the full record sequence in stored order.
/// - A store with no document yet loads as an empty sequence.
/// - `save` replaces the entire document; the empty sequence is a valid
///   document.
/// - Failures are returned, never swallowed or retried, and a failed `load`
///   never yields a partial sequence.
///
/// Stores do no locking. Two callers that each `load` and then `save` can
/// overwrite one another; serializing mutations is the caller's job.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read the whole document.
    async fn load(&self) -> StoreResult<Vec<BookDto>>;

    /// Replace the whole document with `books`.
    async fn save(&self, books: Vec<BookDto>) -> StoreResult<()>;
}
