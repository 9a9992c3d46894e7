//! In-memory key-value storage adapter
//!
//! Mirrors the browser storage contract over two `HashMap`s. Used by
//! tests and the dev harness; also handy as a scratch area for dry-run
//! imports.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use rolehop_core::{KeyValueStore, StorageArea};
use rolehop_domain::Result;

/// Thread-safe in-memory implementation of [`KeyValueStore`].
#[derive(Default)]
pub struct MemoryStorage {
    local: RwLock<HashMap<String, String>>,
    sync: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn area(&self, area: StorageArea) -> &RwLock<HashMap<String, String>> {
        match area {
            StorageArea::Local => &self.local,
            StorageArea::Sync => &self.sync,
        }
    }

    /// Seed a raw value, bypassing the async interface. Test helper.
    pub fn seed(&self, area: StorageArea, key: &str, value: &str) {
        self.area(area).write().insert(key.to_string(), value.to_string());
    }

    /// Snapshot of every key currently stored in `area`. Test helper.
    pub fn keys(&self, area: StorageArea) -> Vec<String> {
        self.area(area).read().keys().cloned().collect()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStorage {
    async fn get(&self, area: StorageArea, key: &str) -> Result<Option<String>> {
        Ok(self.area(area).read().get(key).cloned())
    }

    async fn set(&self, area: StorageArea, key: &str, value: String) -> Result<()> {
        self.area(area).write().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, area: StorageArea, keys: &[String]) -> Result<()> {
        let mut map = self.area(area).write();
        for key in keys {
            map.remove(key);
        }
        Ok(())
    }

    async fn clear(&self, area: StorageArea) -> Result<()> {
        self.area(area).write().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn areas_are_independent() {
        let storage = MemoryStorage::new();
        storage.set(StorageArea::Local, "k", "local".to_string()).await.unwrap();
        storage.set(StorageArea::Sync, "k", "sync".to_string()).await.unwrap();

        assert_eq!(storage.get(StorageArea::Local, "k").await.unwrap().as_deref(), Some("local"));
        assert_eq!(storage.get(StorageArea::Sync, "k").await.unwrap().as_deref(), Some("sync"));

        storage.clear(StorageArea::Local).await.unwrap();
        assert!(storage.get(StorageArea::Local, "k").await.unwrap().is_none());
        assert!(storage.get(StorageArea::Sync, "k").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn remove_ignores_missing_keys() {
        let storage = MemoryStorage::new();
        storage.set(StorageArea::Local, "a", "1".to_string()).await.unwrap();
        storage
            .remove(StorageArea::Local, &["a".to_string(), "missing".to_string()])
            .await
            .unwrap();
        assert!(storage.get(StorageArea::Local, "a").await.unwrap().is_none());
    }
}
