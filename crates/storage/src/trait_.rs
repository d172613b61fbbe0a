//! Storage trait abstraction.

use async_trait::async_trait;
use coursetrack_core::ProgressKey;

/// Error type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Storage abstraction for progress records.
///
/// Records are opaque string blobs keyed per (course, learner) pair. A
/// `write` overwrites the whole value; there is no partial update. Whether a
/// blob parses is the caller's concern, not the store's.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Read the blob for a key, if one exists.
    async fn read(&self, key: &ProgressKey) -> Result<Option<String>>;

    /// Write the blob for a key, replacing any previous value.
    async fn write(&mut self, key: &ProgressKey, blob: &str) -> Result<()>;
}
