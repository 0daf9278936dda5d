//! Catalog operations for the Folio book catalog.
//!
//! This crate sits between callers and a [`DocumentStore`]. It provides:
//! - [`CatalogService`] with get-all, add, replace-all, search, and sorted
//!   listing
//! - The mapping between the domain [`Book`] and the persisted [`BookDto`]
//! - [`CatalogError`], which separates rejected arguments from storage
//!   failures
//!
//! Every mutation is load, transform in memory, save. Nothing is cached
//! between calls, so each operation sees the document as it is on disk.
//!
//! [`DocumentStore`]: folio_store::DocumentStore
//! [`Book`]: folio_types::Book
//! [`BookDto`]: folio_store::BookDto

pub mod error;
pub mod mapper;
pub mod service;

pub use error::{CatalogError, CatalogResult};
pub use service::CatalogService;
