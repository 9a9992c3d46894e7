//! Registry of remembered IAM role-assumption targets
//!
//! A flat `profileId → IamRole` mapping under a single key. IAM logins are
//! remembered per device and never synchronized, so the registry always
//! uses the local area.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use rolehop_domain::{IamRole, Result};

use crate::storage::keys::StorageKeys;
use crate::storage::ports::{KeyValueStore, StorageArea};
use crate::storage::{read_json, write_json};

/// Store for the remembered-IAM-login mapping.
#[derive(Clone)]
pub struct IamLoginRegistry {
    storage: Arc<dyn KeyValueStore>,
    keys: StorageKeys,
}

impl IamLoginRegistry {
    pub fn new(storage: Arc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        Self { storage, keys }
    }

    /// Load the full mapping, defaulting to empty.
    pub async fn load_all(&self) -> Result<HashMap<String, IamRole>> {
        let mapping =
            read_json(self.storage.as_ref(), StorageArea::Local, &self.keys.iam_logins()).await?;
        Ok(mapping.unwrap_or_default())
    }

    /// Remember (or replace) the login for `role.profile_id`.
    pub async fn upsert(&self, role: IamRole) -> Result<()> {
        let mut mapping = self.load_all().await?;
        debug!(profile_id = %role.profile_id, role_name = %role.role_name, "remembering IAM login");
        mapping.insert(role.profile_id.clone(), role);
        self.save(&mapping).await
    }

    /// Forget the login for `profile_id`, if any.
    pub async fn remove(&self, profile_id: &str) -> Result<()> {
        let mut mapping = self.load_all().await?;
        if mapping.remove(profile_id).is_some() {
            self.save(&mapping).await?;
        }
        Ok(())
    }

    /// Forget every login referencing one of `profile_ids`. One read and
    /// at most one write, used by the remove-user cascade.
    pub async fn remove_all(&self, profile_ids: &[String]) -> Result<()> {
        let mut mapping = self.load_all().await?;
        let before = mapping.len();
        mapping.retain(|profile_id, _| !profile_ids.contains(profile_id));
        if mapping.len() != before {
            self.save(&mapping).await?;
        }
        Ok(())
    }

    async fn save(&self, mapping: &HashMap<String, IamRole>) -> Result<()> {
        write_json(self.storage.as_ref(), StorageArea::Local, &self.keys.iam_logins(), mapping)
            .await
    }
}
