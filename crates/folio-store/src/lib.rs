//! Whole-document storage for the Folio book catalog.
//!
//! The catalog lives in a single document on disk. This crate reads that
//! document into an ordered `Vec<BookDto>` and writes a full sequence back,
//! replacing whatever was there. There is no append-in-place and no partial
//! update: every write is a whole-document overwrite.
//!
//! # Document Shape
//!
//! - [`CatalogDocument`] -- the named `library` container listing `book` records
//! - [`BookDto`] -- the persisted record (`title`, `author`, `pages`, in that order)
//!
//! # Storage Backends
//!
//! All backends implement the [`DocumentStore`] trait:
//!
//! - [`JsonFileStore`] -- JSON file at a fixed path, atomically replaced on save
//! - [`InMemoryDocumentStore`] -- lock-guarded `Vec` for tests and embedding
//!
//! # Design Rules
//!
//! 1. A missing document loads as an empty catalog, never as an error.
//! 2. A document that exists but cannot be read or parsed fails the load.
//!    No partial or degraded result is ever returned.
//! 3. A record missing any field is a malformed document.
//! 4. Text is never escaped or sanitized by the store; the JSON encoder's own
//!    escaping carries any string through a save/load cycle unchanged.
//! 5. All I/O errors are propagated with the document path attached.

pub mod document;
pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use document::{BookDto, CatalogDocument};
pub use error::{StorageCause, StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::InMemoryDocumentStore;
pub use traits::DocumentStore;
