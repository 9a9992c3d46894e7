//! Aggregate loader - everything the popup needs in one read
//!
//! Composes settings, users (with customization attached), the
//! deduplicated union of referenced application profiles, and the IAM
//! login mapping. Relationships stay id-based; nothing here caches object
//! graphs across calls.

use std::sync::Arc;

use futures::join;
use tracing::debug;

use rolehop_domain::{AggregateData, Result, User};

use crate::iam::IamLoginRegistry;
use crate::profile::ProfileStore;
use crate::settings::SettingsStore;
use crate::storage::keys::StorageKeys;
use crate::storage::ports::KeyValueStore;
use crate::user::UserStore;

/// Loads the read-time composition of all stored state.
#[derive(Clone)]
pub struct AggregateService {
    settings: SettingsStore,
    users: UserStore,
    profiles: ProfileStore,
    iam: IamLoginRegistry,
}

impl AggregateService {
    pub fn new(storage: Arc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        Self {
            settings: SettingsStore::new(Arc::clone(&storage), keys.clone()),
            users: UserStore::new(Arc::clone(&storage), keys.clone()),
            profiles: ProfileStore::new(Arc::clone(&storage), keys.clone()),
            iam: IamLoginRegistry::new(storage, keys),
        }
    }

    /// Load and compose [`AggregateData`].
    ///
    /// Users come back sorted by `updated_at` descending (most recently
    /// active first); the profile list is the deduplicated union of every
    /// id any user references, in that user order.
    pub async fn load(&self) -> Result<AggregateData> {
        let settings = self.settings.load().await?;
        let use_sync = settings.enable_sync;

        let (users, iam_logins) = join!(self.users.load_all_users(use_sync), self.iam.load_all());
        let mut users = users?;
        let iam_logins = iam_logins?;

        users.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        let referenced: Vec<String> =
            users.iter().flat_map(|user| user.app_profile_ids.iter().cloned()).collect();
        let app_profiles = self.profiles.load_profiles(&referenced).await?;

        let updated_at = users.first().and_then(|user| user.updated_at);
        debug!(users = users.len(), profiles = app_profiles.len(), "aggregate loaded");
        Ok(AggregateData { settings, users, app_profiles, iam_logins, updated_at })
    }
}

/// Resolve the active user from loaded aggregate data.
///
/// A fixed `default_user` wins when that user still exists; the last-used
/// policy picks `last_user_id` when it resolves, and otherwise the most
/// recently active user.
pub fn resolve_active_user(data: &AggregateData) -> Option<&User> {
    if !data.settings.follows_last_used() {
        if let Some(user) = data.users.iter().find(|user| user.user_id == data.settings.default_user)
        {
            return Some(user);
        }
    }
    data.users
        .iter()
        .find(|user| user.user_id == data.settings.last_user_id)
        .or_else(|| data.users.first())
}

/// First user in `users` owning `profile_id`.
///
/// Callers pass users sorted most-recently-active first (the order
/// [`AggregateService::load`] returns), so when two users somehow own the
/// same profile id the most recently active owner wins deterministically.
pub fn find_user_by_profile_id<'a>(users: &'a [User], profile_id: &str) -> Option<&'a User> {
    users.iter().find(|user| user.owns_profile(profile_id))
}
