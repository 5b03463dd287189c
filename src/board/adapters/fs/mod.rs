//! Directory-backed blob store.
//!
//! Persists each blob as a JSON file inside a capability-scoped directory,
//! the desktop analogue of browser local storage. File IO runs on the
//! blocking thread pool so the async executor's workers are never stalled
//! by disk latency.

use async_trait::async_trait;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::board::ports::{BlobStore, BlobStoreError, BlobStoreResult};

/// Blob store writing one file per key inside a scoped directory.
///
/// Writes go through a staging file renamed over the final name, so a
/// crash mid-write leaves the previous blob intact rather than a torn one.
#[derive(Debug, Clone)]
pub struct DirBlobStore {
    dir: Arc<Dir>,
}

impl DirBlobStore {
    /// Creates a store over an already-opened directory capability.
    #[must_use]
    pub fn new(dir: Dir) -> Self {
        Self { dir: Arc::new(dir) }
    }

    /// Opens the given directory with ambient authority and scopes a store
    /// to it.
    ///
    /// # Errors
    ///
    /// Returns any error raised while opening the directory.
    pub fn open_ambient(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::new(Dir::open_ambient_dir(path, ambient_authority())?))
    }

    fn blob_file(key: &str) -> String {
        format!("{key}.json")
    }

    fn staging_file(key: &str) -> String {
        format!("{key}.json.tmp")
    }
}

/// Runs a blocking filesystem operation on a dedicated thread pool.
///
/// Wraps the closure in [`tokio::task::spawn_blocking`] to prevent
/// blocking the async executor's worker threads.
async fn run_blocking<F, T>(f: F) -> BlobStoreResult<T>
where
    F: FnOnce() -> BlobStoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(BlobStoreError::backend)?
}

#[async_trait]
impl BlobStore for DirBlobStore {
    async fn load(&self, key: &str) -> BlobStoreResult<Option<String>> {
        let dir = Arc::clone(&self.dir);
        let file = Self::blob_file(key);
        run_blocking(move || match dir.read_to_string(&file) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(BlobStoreError::backend(err)),
        })
        .await
    }

    async fn save(&self, key: &str, blob: &str) -> BlobStoreResult<()> {
        let dir = Arc::clone(&self.dir);
        let staging = Self::staging_file(key);
        let file = Self::blob_file(key);
        let contents = blob.to_owned();
        run_blocking(move || {
            dir.write(&staging, contents.as_bytes())
                .map_err(BlobStoreError::backend)?;
            dir.rename(&staging, &dir, &file)
                .map_err(BlobStoreError::backend)?;
            Ok(())
        })
        .await
    }
}
