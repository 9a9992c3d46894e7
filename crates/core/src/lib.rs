//! # RoleHop Core
//!
//! Pure business logic layer - no browser or platform dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (storage, tabs, containers)
//! - The stores over browser key-value storage (settings, users, IAM
//!   logins, application profiles)
//! - The profile resolver, URL and session-label builders
//! - The navigation orchestrator and aggregate loader
//!
//! ## Architecture Principles
//! - Only depends on `rolehop-domain`
//! - No direct browser API calls - everything external goes through traits
//! - Pure, testable business logic

pub mod aggregate;
pub mod config;
pub mod iam;
pub mod navigation;
pub mod profile;
pub mod settings;
pub mod storage;
pub mod user;

// Re-export specific items to avoid ambiguity
pub use aggregate::{find_user_by_profile_id, resolve_active_user, AggregateService};
pub use config::UserConfigService;
pub use iam::IamLoginRegistry;
pub use navigation::ports::{ContainerHost, ContainerRef, TabController, TabInfo};
pub use navigation::NavigationService;
pub use profile::resolver::customize;
pub use profile::ProfileStore;
pub use settings::SettingsStore;
pub use storage::keys::StorageKeys;
pub use storage::ports::{KeyValueStore, StorageArea};
pub use user::UserStore;
