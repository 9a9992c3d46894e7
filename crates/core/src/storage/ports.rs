//! Port interface for browser key-value storage
//!
//! This trait defines the boundary between core business logic and the
//! browser's storage APIs. The browser exposes two areas: a durable local
//! one and one that is optionally synchronized across devices; which area
//! per-user data lands in is a user preference, so every call names its
//! area explicitly.

use async_trait::async_trait;
use rolehop_domain::Result;

/// The two storage areas offered by the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageArea {
    /// Durable, device-local storage.
    Local,
    /// Storage synchronized across the user's devices.
    Sync,
}

impl StorageArea {
    /// Area selected by the user's sync preference.
    pub fn for_sync(use_sync: bool) -> Self {
        if use_sync {
            Self::Sync
        } else {
            Self::Local
        }
    }
}

/// Trait for asynchronous key-value storage over two areas.
///
/// Values are opaque serialized text; parsing is the caller's concern.
/// A missing key is not an error anywhere in this interface.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`, if any.
    async fn get(&self, area: StorageArea, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any existing value.
    async fn set(&self, area: StorageArea, key: &str, value: String) -> Result<()>;

    /// Remove every listed key. Missing keys are ignored.
    async fn remove(&self, area: StorageArea, keys: &[String]) -> Result<()>;

    /// Remove everything in the area.
    async fn clear(&self, area: StorageArea) -> Result<()>;
}
