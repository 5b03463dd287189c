//! Blob store port for board snapshot persistence.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for blob store operations.
pub type BlobStoreResult<T> = Result<T, BlobStoreError>;

/// Keyed blob persistence contract.
///
/// The store is a flat namespace of string keys to opaque string blobs,
/// modelled on browser local storage. It knows nothing about board
/// structure; callers decide what the blobs mean. An absent key is an
/// ordinary outcome, not an error.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Reads the blob stored under the given key.
    ///
    /// Returns `None` when nothing has been stored under the key.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError::Backend`] when the underlying storage
    /// cannot be read.
    async fn load(&self, key: &str) -> BlobStoreResult<Option<String>>;

    /// Writes the blob under the given key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError::Backend`] when the underlying storage
    /// cannot be written.
    async fn save(&self, key: &str, blob: &str) -> BlobStoreResult<()>;
}

/// Errors returned by blob store implementations.
#[derive(Debug, Clone, Error)]
pub enum BlobStoreError {
    /// Storage-layer failure.
    #[error("blob store backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl BlobStoreError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
