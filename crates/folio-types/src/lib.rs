//! Domain types for the Folio book catalog.
//!
//! Every other Folio crate depends on `folio-types`. The types here are what
//! callers of the catalog see; the on-disk shape lives in `folio-store`.
//!
//! # Key Types
//!
//! - [`Book`] — A single title/author/pages catalog entry
//! - [`text`] — Case-insensitive ordinal comparison used by search and sort

pub mod book;
pub mod text;

pub use book::Book;
pub use text::{cmp_ignore_case, contains_ignore_case};
