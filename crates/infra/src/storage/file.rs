//! JSON-file-backed key-value storage adapter
//!
//! Each storage area is one JSON document (`local.json` / `sync.json`)
//! under the adapter's directory, loaded at open and written through on
//! every mutation. The files are small preference documents, so the
//! synchronous writes inside the async interface are acceptable.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::warn;

use rolehop_core::{KeyValueStore, StorageArea};
use rolehop_domain::{Result, RoleHopError};

/// File-backed implementation of [`KeyValueStore`].
pub struct FileStorage {
    dir: PathBuf,
    local: RwLock<HashMap<String, String>>,
    sync: RwLock<HashMap<String, String>>,
}

impl FileStorage {
    /// Open (or create) the storage directory and load both areas.
    ///
    /// A missing area file starts empty; an unreadable one is discarded
    /// with a warning rather than refusing to open.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .map_err(|err| RoleHopError::Storage(format!("creating {}: {err}", dir.display())))?;

        let local = Self::load_area(&dir.join(Self::file_name(StorageArea::Local)));
        let sync = Self::load_area(&dir.join(Self::file_name(StorageArea::Sync)));
        Ok(Self { dir, local: RwLock::new(local), sync: RwLock::new(sync) })
    }

    fn file_name(area: StorageArea) -> &'static str {
        match area {
            StorageArea::Local => "local.json",
            StorageArea::Sync => "sync.json",
        }
    }

    fn load_area(path: &Path) -> HashMap<String, String> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => return HashMap::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "discarding unreadable storage file");
                HashMap::new()
            }
        }
    }

    fn map(&self, area: StorageArea) -> &RwLock<HashMap<String, String>> {
        match area {
            StorageArea::Local => &self.local,
            StorageArea::Sync => &self.sync,
        }
    }

    fn persist(&self, area: StorageArea) -> Result<()> {
        let path = self.dir.join(Self::file_name(area));
        let raw = {
            let map = self.map(area).read();
            serde_json::to_string_pretty(&*map)
                .map_err(|err| RoleHopError::Serialization(err.to_string()))?
        };
        fs::write(&path, raw)
            .map_err(|err| RoleHopError::Storage(format!("writing {}: {err}", path.display())))
    }
}

#[async_trait]
impl KeyValueStore for FileStorage {
    async fn get(&self, area: StorageArea, key: &str) -> Result<Option<String>> {
        Ok(self.map(area).read().get(key).cloned())
    }

    async fn set(&self, area: StorageArea, key: &str, value: String) -> Result<()> {
        self.map(area).write().insert(key.to_string(), value);
        self.persist(area)
    }

    async fn remove(&self, area: StorageArea, keys: &[String]) -> Result<()> {
        {
            let mut map = self.map(area).write();
            for key in keys {
                map.remove(key);
            }
        }
        self.persist(area)
    }

    async fn clear(&self, area: StorageArea) -> Result<()> {
        self.map(area).write().clear();
        self.persist(area)
    }
}
