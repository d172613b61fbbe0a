//! File-backed store implementation.
//!
//! Keeps one file per progress key under a root directory. The key's
//! rendered form is already filesystem-safe (ULIDs joined by underscores),
//! so the file name is the key plus a `.json` suffix.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use coursetrack_core::ProgressKey;
use tokio::fs;
use tracing::debug;

use super::{ProgressStore, Result};

/// File-per-key store rooted at a directory.
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Create the store, ensuring the root directory exists.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    fn record_path(&self, key: &ProgressKey) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

#[async_trait]
impl ProgressStore for JsonFileStore {
    async fn read(&self, key: &ProgressKey) -> Result<Option<String>> {
        match fs::read_to_string(self.record_path(key)).await {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn write(&mut self, key: &ProgressKey, blob: &str) -> Result<()> {
        let path = self.record_path(key);
        fs::write(&path, blob.as_bytes()).await?;
        debug!(%key, path = %path.display(), "progress record written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursetrack_core::{CourseId, LearnerId};

    fn key() -> ProgressKey {
        ProgressKey::new(CourseId::new(), LearnerId::new())
    }

    #[tokio::test]
    async fn read_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).await.unwrap();
        assert_eq!(store.read(&key()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path()).await.unwrap();
        let key = key();

        store.write(&key, r#"{"scores":{}}"#).await.unwrap();
        assert_eq!(
            store.read(&key).await.unwrap().as_deref(),
            Some(r#"{"scores":{}}"#)
        );
    }

    #[tokio::test]
    async fn write_overwrites_whole_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path()).await.unwrap();
        let key = key();

        store.write(&key, "first").await.unwrap();
        store.write(&key, "second").await.unwrap();
        assert_eq!(store.read(&key).await.unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn keys_are_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path()).await.unwrap();
        let a = key();
        let b = key();

        store.write(&a, "a").await.unwrap();
        assert_eq!(store.read(&b).await.unwrap(), None);
    }
}
