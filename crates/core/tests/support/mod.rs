//! Shared test helpers for `rolehop-core` integration tests.
//!
//! Provides a storage-backed test context plus fixture builders so the
//! tests can focus on behaviour instead of boilerplate.

pub mod browser;

use std::sync::Arc;

use rolehop_core::{
    AggregateService, IamLoginRegistry, ProfileStore, SettingsStore, StorageKeys, UserConfigService,
    UserStore,
};
use rolehop_domain::constants::AWS_ACCOUNT_APPLICATION;
use rolehop_domain::{ApplicationProfile, ProfileRecord, SearchMetadata, User};
use rolehop_infra::MemoryStorage;

/// Shared context wiring every store to one in-memory storage adapter.
pub struct TestContext {
    pub storage: Arc<MemoryStorage>,
    pub keys: StorageKeys,
    pub settings: SettingsStore,
    pub users: UserStore,
    pub profiles: ProfileStore,
    pub iam: IamLoginRegistry,
    pub aggregate: AggregateService,
    pub config: UserConfigService,
}

/// Create a fresh context over empty storage.
pub fn setup_test_context() -> TestContext {
    let storage = Arc::new(MemoryStorage::new());
    let keys = StorageKeys::default();
    let kv: Arc<dyn rolehop_core::KeyValueStore> = storage.clone();

    TestContext {
        settings: SettingsStore::new(Arc::clone(&kv), keys.clone()),
        users: UserStore::new(Arc::clone(&kv), keys.clone()),
        profiles: ProfileStore::new(Arc::clone(&kv), keys.clone()),
        iam: IamLoginRegistry::new(Arc::clone(&kv), keys.clone()),
        aggregate: AggregateService::new(Arc::clone(&kv), keys.clone()),
        config: UserConfigService::new(kv, keys.clone()),
        storage,
        keys,
    }
}

/// A user in directory `d-1234567890` owning the given profile ids.
pub fn test_user(user_id: &str, profile_ids: &[&str]) -> User {
    User {
        user_id: user_id.to_string(),
        managed_active_directory_id: "d-1234567890".to_string(),
        app_profile_ids: profile_ids.iter().map(|id| (*id).to_string()).collect(),
        ..User::default()
    }
}

/// An AWS-account profile with search metadata.
pub fn aws_profile(id: &str, name: &str, account_id: &str) -> ApplicationProfile {
    ApplicationProfile {
        application_name: AWS_ACCOUNT_APPLICATION.to_string(),
        profile: ProfileRecord { id: id.to_string(), name: name.to_string(), custom: None },
        search_metadata: Some(SearchMetadata {
            account_id: Some(account_id.to_string()),
            account_name: Some(format!("account-{account_id}")),
        }),
    }
}
