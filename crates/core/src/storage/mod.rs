//! Storage boundary: the key-value capability port and key templating
//!
//! All persistent state lives behind [`ports::KeyValueStore`]. Values are
//! serialized JSON text; this module also carries the shared read/write
//! helpers so every store treats absence and corruption the same way.

pub mod keys;
pub mod ports;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use rolehop_domain::Result;

use ports::{KeyValueStore, StorageArea};

/// Read a key and parse it as JSON.
///
/// A missing key is a valid state and returns `None`. A present but
/// unparseable value is treated as absent: the preference store is
/// local-first and should self-heal rather than fail the whole popup.
pub(crate) async fn read_json<T: DeserializeOwned>(
    storage: &dyn KeyValueStore,
    area: StorageArea,
    key: &str,
) -> Result<Option<T>> {
    let Some(raw) = storage.get(area, key).await? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            warn!(key, error = %err, "discarding malformed stored value");
            Ok(None)
        }
    }
}

/// Serialize a value as JSON and write it under `key`.
pub(crate) async fn write_json<T: Serialize>(
    storage: &dyn KeyValueStore,
    area: StorageArea,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    storage.set(area, key, raw).await
}
