//! Storage effect handlers
//!
//! `FilesystemStorage` writes one JSON document per store key under a base
//! directory. `MemoryStorage` keeps blobs in a shared map and backs tests
//! and ephemeral hosts.

use async_trait::async_trait;
use dime_core::effects::{StorageEffects, StorageError};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tracing::debug;

fn check_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty() {
        return Err(StorageError::InvalidKey {
            reason: "key cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Filesystem-backed storage, one `<key>.json` file per key
#[derive(Debug, Clone)]
pub struct FilesystemStorage {
    base_path: PathBuf,
}

impl FilesystemStorage {
    /// Store snapshots under the given directory
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{key}.json"))
    }
}

#[async_trait]
impl StorageEffects for FilesystemStorage {
    async fn store(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        check_key(key)?;

        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::WriteFailed(format!("create directory: {e}")))?;
        }

        fs::write(&path, value)
            .await
            .map_err(|e| StorageError::WriteFailed(format!("write {}: {e}", path.display())))?;
        debug!(key, "stored snapshot");
        Ok(())
    }

    async fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        check_key(key)?;

        match fs::read(self.path_for(key)).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed(format!("read {key}: {e}"))),
        }
    }

    async fn remove(&self, key: &str) -> Result<bool, StorageError> {
        check_key(key)?;

        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => {
                debug!(key, "removed snapshot");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::WriteFailed(format!("remove {key}: {e}"))),
        }
    }
}

/// In-memory storage shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<async_lock::Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageEffects for MemoryStorage {
    async fn store(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        check_key(key)?;
        self.inner.lock().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        check_key(key)?;
        Ok(self.inner.lock().await.get(key).cloned())
    }

    async fn remove(&self, key: &str) -> Result<bool, StorageError> {
        check_key(key)?;
        Ok(self.inner.lock().await.remove(key).is_some())
    }
}
