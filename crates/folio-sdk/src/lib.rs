//! High-level SDK for the Folio book catalog.
//!
//! Assembles a [`CatalogService`] over a [`JsonFileStore`] so applications
//! only need a path. This is the main entry point for applications embedding
//! Folio.
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = folio_sdk::open_catalog("books.json");
//! catalog.add(folio_sdk::Book::new("Misery", "King", 320)).await?;
//! for book in catalog.get_sorted().await? {
//!     println!("{} by {}", book.title, book.author);
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod error;

pub use catalog::{open_catalog, open_with_config, Catalog};
pub use config::{CatalogConfig, FolioConfig, DEFAULT_CATALOG_PATH, DEFAULT_CONFIG_PATH};
pub use error::{SdkError, SdkResult};

// Re-export key types
pub use folio_service::{CatalogError, CatalogResult, CatalogService};
pub use folio_store::{JsonFileStore, StoreError};
pub use folio_types::Book;
