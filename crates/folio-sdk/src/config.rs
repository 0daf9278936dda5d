use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SdkError, SdkResult};

/// Catalog document used when nothing else is configured.
pub const DEFAULT_CATALOG_PATH: &str = "books.json";

/// Config file looked up when no other is named.
pub const DEFAULT_CONFIG_PATH: &str = "folio.toml";

/// Top-level Folio configuration.
///
/// ```toml
/// [catalog]
/// path = "books.json"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub catalog: CatalogConfig,
}

/// Where the catalog document lives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path of the catalog document. Relative paths in a config file are
    /// resolved against the directory holding that file.
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CATALOG_PATH),
        }
    }
}

impl FolioConfig {
    /// Load config from a TOML file.
    ///
    /// A missing file yields the defaults. A file that exists but cannot be
    /// read or parsed is an error.
    pub fn load(path: &Path) -> SdkResult<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(SdkError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let mut config: Self = toml::from_str(&contents).map_err(|source| SdkError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.catalog.path.is_relative() {
            if let Some(dir) = path.parent() {
                config.catalog.path = dir.join(&config.catalog.path);
            }
        }
        Ok(config)
    }
}
