//! In-memory blob store for board tests and ephemeral sessions.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::ports::{BlobStore, BlobStoreError, BlobStoreResult};

/// Thread-safe in-memory blob store.
///
/// Clones share the same underlying map, so a clone handed to a service
/// observes every write the service makes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBlobStore {
    blobs: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryBlobStore {
    /// Creates an empty in-memory blob store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn load(&self, key: &str) -> BlobStoreResult<Option<String>> {
        let blobs = self
            .blobs
            .read()
            .map_err(|err| BlobStoreError::backend(std::io::Error::other(err.to_string())))?;
        Ok(blobs.get(key).cloned())
    }

    async fn save(&self, key: &str, blob: &str) -> BlobStoreResult<()> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|err| BlobStoreError::backend(std::io::Error::other(err.to_string())))?;
        blobs.insert(key.to_owned(), blob.to_owned());
        Ok(())
    }
}
