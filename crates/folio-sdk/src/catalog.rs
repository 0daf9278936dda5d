use std::path::PathBuf;

use folio_service::CatalogService;
use folio_store::JsonFileStore;
use tracing::debug;

use crate::config::FolioConfig;

/// A catalog service backed by a JSON document on disk.
pub type Catalog = CatalogService<JsonFileStore>;

/// Open the catalog stored at `path`.
///
/// The document does not need to exist; an absent file reads as an empty
/// catalog and is created by the first write. The returned service is ready
/// to use immediately.
pub fn open_catalog(path: impl Into<PathBuf>) -> Catalog {
    let store = JsonFileStore::new(path);
    debug!(path = %store.path().display(), "opened catalog");
    CatalogService::new(store)
}

/// Open the catalog named by `config`.
pub fn open_with_config(config: &FolioConfig) -> Catalog {
    open_catalog(config.catalog.path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::Book;

    #[tokio::test]
    async fn new_catalog_is_empty_and_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");

        let catalog = open_catalog(&path);

        assert!(catalog.get_all().await.unwrap().is_empty());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn first_write_creates_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        let catalog = open_catalog(&path);

        catalog.add(Book::new("Misery", "King", 320)).await.unwrap();

        assert!(path.exists());
        assert_eq!(catalog.store().path(), path.as_path());
    }

    #[tokio::test]
    async fn catalogs_on_same_path_share_the_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");

        open_catalog(&path).add(Book::new("Carrie", "King", 199)).await.unwrap();
        let books = open_catalog(&path).get_all().await.unwrap();

        assert_eq!(books, vec![Book::new("Carrie", "King", 199)]);
    }

    #[tokio::test]
    async fn open_with_config_uses_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = FolioConfig::default();
        config.catalog.path = dir.path().join("configured.json");

        let catalog = open_with_config(&config);
        catalog.replace_all(Vec::new()).await.unwrap();

        assert!(dir.path().join("configured.json").exists());
    }
}
