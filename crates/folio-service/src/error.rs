use folio_store::StoreError;

/// Errors produced by catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The caller passed an argument the operation cannot accept.
    /// Raised before any storage access.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The document store failed; passed through unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CatalogError {
    /// Returns `true` if the caller's input was rejected.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Result alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
