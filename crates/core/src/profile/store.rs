//! Application-profile store
//!
//! Raw profiles are persisted once per profile id, independent of which
//! users reference them; ownership lives on the user record as a list of
//! ids. Records are device-local: the SSO directory re-delivers them on
//! any new device.

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::try_join_all;
use tracing::debug;

use rolehop_domain::{ApplicationProfile, Result};

use crate::storage::keys::StorageKeys;
use crate::storage::ports::{KeyValueStore, StorageArea};
use crate::storage::{read_json, write_json};

/// Store for raw [`ApplicationProfile`] records.
#[derive(Clone)]
pub struct ProfileStore {
    storage: Arc<dyn KeyValueStore>,
    keys: StorageKeys,
}

impl ProfileStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        Self { storage, keys }
    }

    /// Persist one profile under its own id. The resolved `custom` block
    /// never reaches storage (it is skipped at serialization).
    pub async fn save_profile(&self, profile: &ApplicationProfile) -> Result<()> {
        write_json(
            self.storage.as_ref(),
            StorageArea::Local,
            &self.keys.profile(&profile.profile.id),
            profile,
        )
        .await
    }

    /// Load the profiles for a list of ids.
    ///
    /// Ids are deduplicated preserving first occurrence; loads run
    /// concurrently and the result keeps the id-list order. Ids without a
    /// stored record (or with an unparseable one) are skipped.
    pub async fn load_profiles(&self, profile_ids: &[String]) -> Result<Vec<ApplicationProfile>> {
        let mut seen = HashSet::new();
        let unique: Vec<&String> =
            profile_ids.iter().filter(|id| seen.insert(id.as_str())).collect();

        let loads = unique.iter().map(|id| {
            let key = self.keys.profile(id);
            async move {
                read_json::<ApplicationProfile>(self.storage.as_ref(), StorageArea::Local, &key)
                    .await
            }
        });
        let loaded = try_join_all(loads).await?;
        let profiles: Vec<ApplicationProfile> = loaded.into_iter().flatten().collect();
        debug!(requested = unique.len(), loaded = profiles.len(), "profiles loaded");
        Ok(profiles)
    }

    /// Remove every listed profile record.
    pub async fn remove_profiles(&self, profile_ids: &[String]) -> Result<()> {
        if profile_ids.is_empty() {
            return Ok(());
        }
        let keys: Vec<String> = profile_ids.iter().map(|id| self.keys.profile(id)).collect();
        self.storage.remove(StorageArea::Local, &keys).await
    }
}
