//! Settings store - load/save with forward-compatible backfill

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use rolehop_domain::types::settings::PartialSettings;
use rolehop_domain::{Result, Settings};

use crate::storage::keys::StorageKeys;
use crate::storage::ports::{KeyValueStore, StorageArea};
use crate::storage::{read_json, write_json};

/// Store for the extension-wide [`Settings`] record.
///
/// Settings are always kept in the synchronized area, regardless of the
/// user's own sync preference, so a fresh device starts with the user's
/// configuration in place.
#[derive(Clone)]
pub struct SettingsStore {
    storage: Arc<dyn KeyValueStore>,
    keys: StorageKeys,
}

impl SettingsStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        Self { storage, keys }
    }

    /// Load the settings record.
    ///
    /// Absence and partial data are valid states, not errors: a missing
    /// record loads as the default record, and a stored record missing
    /// newly-added keys is backfilled key by key without touching the
    /// keys it does carry.
    pub async fn load(&self) -> Result<Settings> {
        let partial: Option<PartialSettings> =
            read_json(self.storage.as_ref(), StorageArea::Sync, &self.keys.settings()).await?;
        Ok(partial.unwrap_or_default().into_complete())
    }

    /// Persist the full settings record with a fresh write stamp.
    ///
    /// Returns the stamped record so callers can keep their in-memory
    /// copy in step with what was written.
    pub async fn save(&self, settings: &Settings) -> Result<Settings> {
        let mut stamped = settings.clone();
        stamped.updated_at = Some(Utc::now());
        write_json(self.storage.as_ref(), StorageArea::Sync, &self.keys.settings(), &stamped)
            .await?;
        debug!(key = %self.keys.settings(), "settings saved");
        Ok(stamped)
    }
}
