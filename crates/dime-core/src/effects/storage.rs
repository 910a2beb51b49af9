//! Storage effect interface
//!
//! Key-value blob storage for store snapshots. Keys are flat identifiers
//! (`auth`, `member`, `tithe`, `church`); values are opaque bytes, encoded
//! and decoded by the caller.

use async_trait::async_trait;
use std::sync::Arc;

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("invalid key: {reason}")]
    InvalidKey { reason: String },
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
}

/// Durable key-value blob storage
#[async_trait]
pub trait StorageEffects: Send + Sync {
    /// Persist a value under a key, replacing any previous value
    async fn store(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;

    /// Fetch the value stored under a key, `None` when absent
    async fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Delete the value stored under a key; true when something was removed
    async fn remove(&self, key: &str) -> Result<bool, StorageError>;
}

#[async_trait]
impl<T: StorageEffects + ?Sized> StorageEffects for Arc<T> {
    async fn store(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        (**self).store(key, value).await
    }

    async fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).retrieve(key).await
    }

    async fn remove(&self, key: &str) -> Result<bool, StorageError> {
        (**self).remove(key).await
    }
}
