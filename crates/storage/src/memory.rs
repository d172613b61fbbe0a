//! In-memory store implementation.
//!
//! Backs tests and sessions that don't care about surviving a restart.

use std::collections::HashMap;

use async_trait::async_trait;
use coursetrack_core::ProgressKey;

use super::{ProgressStore, Result};

/// HashMap-backed store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl ProgressStore for MemoryStore {
    async fn read(&self, key: &ProgressKey) -> Result<Option<String>> {
        Ok(self.records.get(&key.to_string()).cloned())
    }

    async fn write(&mut self, key: &ProgressKey, blob: &str) -> Result<()> {
        self.records.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursetrack_core::{CourseId, LearnerId};

    #[tokio::test]
    async fn write_then_read() {
        let mut store = MemoryStore::new();
        let key = ProgressKey::new(CourseId::new(), LearnerId::new());

        assert!(store.is_empty());
        store.write(&key, "blob").await.unwrap();
        assert_eq!(store.read(&key).await.unwrap().as_deref(), Some("blob"));
        assert_eq!(store.len(), 1);
    }
}
