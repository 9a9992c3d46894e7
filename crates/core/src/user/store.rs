//! User store - per-user records and their customization
//!
//! The user record and its customization record live under separate keys
//! (and move together between areas when the sync preference changes).
//! Customization is attached to the user object at read time and split
//! back out at write time; the user record on disk never embeds it.

use std::sync::Arc;

use chrono::Utc;
use futures::future::try_join_all;
use futures::join;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use rolehop_domain::constants::DEFAULT_USER_LAST_USED;
use rolehop_domain::types::customization::PartialCustomization;
use rolehop_domain::{Customization, Result, RoleHopError, User};

use crate::iam::IamLoginRegistry;
use crate::profile::ProfileStore;
use crate::settings::SettingsStore;
use crate::storage::keys::StorageKeys;
use crate::storage::ports::{KeyValueStore, StorageArea};
use crate::storage::{read_json, write_json};

/// The synchronized global user-id list under `{name}-users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct UserIdList {
    users: Vec<String>,
}

/// Store for per-user records and customization.
#[derive(Clone)]
pub struct UserStore {
    storage: Arc<dyn KeyValueStore>,
    keys: StorageKeys,
    profiles: ProfileStore,
    iam: IamLoginRegistry,
    settings: SettingsStore,
}

impl UserStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        let profiles = ProfileStore::new(Arc::clone(&storage), keys.clone());
        let iam = IamLoginRegistry::new(Arc::clone(&storage), keys.clone());
        let settings = SettingsStore::new(Arc::clone(&storage), keys.clone());
        Self { storage, keys, profiles, iam, settings }
    }

    /// Load one user with customization attached.
    ///
    /// The user record and the customization record are read
    /// independently from the area selected by `use_sync`. A missing user
    /// record loads as an empty record - customization is still attached,
    /// and callers must check [`User::is_present`] before trusting
    /// essential fields.
    pub async fn load_user(&self, user_id: &str, use_sync: bool) -> Result<User> {
        let area = StorageArea::for_sync(use_sync);
        let user_key = self.keys.user(user_id);
        let custom_key = self.keys.custom(user_id);
        let (user, custom) = join!(
            read_json::<User>(self.storage.as_ref(), area, &user_key),
            read_json::<PartialCustomization>(self.storage.as_ref(), area, &custom_key),
        );
        let mut user = user?.unwrap_or_default();
        user.custom = custom?.unwrap_or_default().into_complete();
        Ok(user)
    }

    /// Load every known user concurrently. Result order follows the
    /// synchronized id list, not completion order.
    pub async fn load_all_users(&self, use_sync: bool) -> Result<Vec<User>> {
        let ids = self.load_user_ids().await?;
        let loads = ids.iter().map(|id| self.load_user(id, use_sync));
        try_join_all(loads).await
    }

    /// Persist a user, splitting customization out to its own key first,
    /// then writing the user record with `custom` cleared and a fresh
    /// write stamp. Returns the stamped record (with customization still
    /// attached) and ensures the id is on the global list.
    pub async fn save_user(&self, user: &User, use_sync: bool) -> Result<User> {
        if user.user_id.is_empty() {
            return Err(RoleHopError::InvalidInput("cannot save a user without an id".into()));
        }
        let area = StorageArea::for_sync(use_sync);

        self.save_customization(&user.user_id, &user.custom, use_sync).await?;

        let mut stamped = user.clone();
        stamped.updated_at = Some(Utc::now());
        // `custom` is #[serde(skip)]: the record on disk never embeds it.
        write_json(self.storage.as_ref(), area, &self.keys.user(&user.user_id), &stamped).await?;

        let mut ids = self.load_user_ids().await?;
        if !ids.contains(&user.user_id) {
            ids.push(user.user_id.clone());
            self.save_user_ids(&ids).await?;
        }
        debug!(user_id = %user.user_id, "user saved");
        Ok(stamped)
    }

    /// Persist only the customization record for `user_id`.
    pub async fn save_customization(
        &self,
        user_id: &str,
        custom: &Customization,
        use_sync: bool,
    ) -> Result<()> {
        let area = StorageArea::for_sync(use_sync);
        write_json(self.storage.as_ref(), area, &self.keys.custom(user_id), custom).await
    }

    /// Remove a user and everything hanging off it: the user and
    /// customization records, every profile the user owned, any IAM
    /// logins referencing those profiles, and the id-list entry; then
    /// repair `last_user_id` / `default_user` if they pointed at the
    /// removed user.
    ///
    /// The steps are sequential and not atomic - a failure partway leaves
    /// partial state, and the error names the step that failed.
    pub async fn remove_user(&self, user_id: &str, use_sync: bool) -> Result<()> {
        let area = StorageArea::for_sync(use_sync);
        let user = self
            .load_user(user_id, use_sync)
            .await
            .map_err(|err| step_failed(user_id, "loading the user record", &err))?;

        self.profiles
            .remove_profiles(&user.app_profile_ids)
            .await
            .map_err(|err| step_failed(user_id, "removing owned profiles", &err))?;

        self.iam
            .remove_all(&user.app_profile_ids)
            .await
            .map_err(|err| step_failed(user_id, "removing IAM logins", &err))?;

        self.storage
            .remove(area, &[self.keys.user(user_id), self.keys.custom(user_id)])
            .await
            .map_err(|err| step_failed(user_id, "removing the user and customization records", &err))?;

        let mut ids = self
            .load_user_ids()
            .await
            .map_err(|err| step_failed(user_id, "loading the user-id list", &err))?;
        ids.retain(|id| id != user_id);
        self.save_user_ids(&ids)
            .await
            .map_err(|err| step_failed(user_id, "updating the user-id list", &err))?;

        self.repair_settings(user_id, &ids)
            .await
            .map_err(|err| step_failed(user_id, "repairing settings", &err))?;

        info!(user_id, remaining_users = ids.len(), "user removed");
        Ok(())
    }

    /// Read the synchronized user-id list, defaulting to empty.
    pub async fn load_user_ids(&self) -> Result<Vec<String>> {
        let list: Option<UserIdList> =
            read_json(self.storage.as_ref(), StorageArea::Sync, &self.keys.users()).await?;
        Ok(list.unwrap_or_default().users)
    }

    async fn save_user_ids(&self, ids: &[String]) -> Result<()> {
        let list = UserIdList { users: ids.to_vec() };
        write_json(self.storage.as_ref(), StorageArea::Sync, &self.keys.users(), &list).await
    }

    /// Point `last_user_id` at the next remaining user (or nothing) and
    /// fall `default_user` back to the last-used policy when either
    /// referenced the removed user.
    async fn repair_settings(&self, removed_id: &str, remaining: &[String]) -> Result<()> {
        let mut settings = self.settings.load().await?;
        let mut dirty = false;

        if settings.last_user_id == removed_id {
            settings.last_user_id = remaining.first().cloned().unwrap_or_default();
            dirty = true;
        }
        if settings.default_user == removed_id {
            settings.default_user = DEFAULT_USER_LAST_USED.to_string();
            dirty = true;
        }
        if dirty {
            self.settings.save(&settings).await?;
        }
        Ok(())
    }
}

fn step_failed(user_id: &str, step: &str, err: &RoleHopError) -> RoleHopError {
    RoleHopError::Storage(format!("remove_user({user_id}) failed while {step}: {err}"))
}
