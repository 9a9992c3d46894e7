//! Extension-wide settings
//!
//! Settings are global, not per-user, and are always stored in the
//! synchronized area regardless of the user's own sync preference. The
//! same backfill invariant as customization applies: see
//! [`PartialSettings`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_USER_LAST_USED;

/// Isolated-browsing-container options. Only honored on the one browser
/// platform that supports containers; inert elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSettings {
    /// Open console sessions inside isolated containers.
    pub use_containers: bool,
    /// Reuse an existing container whose name matches the session label
    /// instead of opening a new tab.
    pub reuse_containers: bool,
    /// Minutes after which a reused container should be expired by the
    /// background collaborator. `None` disables expiry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_minutes: Option<u32>,
}

impl Default for ContainerSettings {
    fn default() -> Self {
        Self { use_containers: false, reuse_containers: true, expire_minutes: None }
    }
}

/// Profile-table display preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSettings {
    pub show_account_id: bool,
    pub show_account_name: bool,
    pub show_application: bool,
    pub page_size: u32,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self { show_account_id: true, show_account_name: true, show_application: false, page_size: 10 }
    }
}

/// Extension-wide settings record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// `"lastUser"` to follow the most recently used user, or a fixed
    /// user id.
    pub default_user: String,
    /// Store per-user data in the synchronized area.
    pub enable_sync: bool,
    pub last_user_id: String,
    pub last_profile_id: String,
    /// Show every user's profiles in the popup, not just the active
    /// user's; navigation re-resolves the owning user on demand.
    pub show_all_profiles: bool,
    pub open_in_new_tab: bool,
    pub icon_color: String,
    pub containers: ContainerSettings,
    pub table: TableSettings,
    /// Stamped on every save; last write wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_user: DEFAULT_USER_LAST_USED.to_string(),
            enable_sync: true,
            last_user_id: String::new(),
            last_profile_id: String::new(),
            show_all_profiles: false,
            open_in_new_tab: true,
            icon_color: "default".to_string(),
            containers: ContainerSettings::default(),
            table: TableSettings::default(),
            updated_at: None,
        }
    }
}

impl Settings {
    /// Whether `default_user` follows the last-used policy rather than a
    /// fixed user id.
    pub fn follows_last_used(&self) -> bool {
        self.default_user == DEFAULT_USER_LAST_USED
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialContainerSettings {
    pub use_containers: Option<bool>,
    pub reuse_containers: Option<bool>,
    pub expire_minutes: Option<u32>,
}

impl PartialContainerSettings {
    fn into_complete(self) -> ContainerSettings {
        let defaults = ContainerSettings::default();
        ContainerSettings {
            use_containers: self.use_containers.unwrap_or(defaults.use_containers),
            reuse_containers: self.reuse_containers.unwrap_or(defaults.reuse_containers),
            expire_minutes: self.expire_minutes.or(defaults.expire_minutes),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialTableSettings {
    pub show_account_id: Option<bool>,
    pub show_account_name: Option<bool>,
    pub show_application: Option<bool>,
    pub page_size: Option<u32>,
}

impl PartialTableSettings {
    fn into_complete(self) -> TableSettings {
        let defaults = TableSettings::default();
        TableSettings {
            show_account_id: self.show_account_id.unwrap_or(defaults.show_account_id),
            show_account_name: self.show_account_name.unwrap_or(defaults.show_account_name),
            show_application: self.show_application.unwrap_or(defaults.show_application),
            page_size: self.page_size.unwrap_or(defaults.page_size),
        }
    }
}

/// Stored form of [`Settings`] where any key may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialSettings {
    pub default_user: Option<String>,
    pub enable_sync: Option<bool>,
    pub last_user_id: Option<String>,
    pub last_profile_id: Option<String>,
    pub show_all_profiles: Option<bool>,
    pub open_in_new_tab: Option<bool>,
    pub icon_color: Option<String>,
    pub containers: Option<PartialContainerSettings>,
    pub table: Option<PartialTableSettings>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl PartialSettings {
    /// Merge stored fields over a fresh default record.
    pub fn into_complete(self) -> Settings {
        let defaults = Settings::default();
        Settings {
            default_user: self.default_user.unwrap_or(defaults.default_user),
            enable_sync: self.enable_sync.unwrap_or(defaults.enable_sync),
            last_user_id: self.last_user_id.unwrap_or(defaults.last_user_id),
            last_profile_id: self.last_profile_id.unwrap_or(defaults.last_profile_id),
            show_all_profiles: self.show_all_profiles.unwrap_or(defaults.show_all_profiles),
            open_in_new_tab: self.open_in_new_tab.unwrap_or(defaults.open_in_new_tab),
            icon_color: self.icon_color.unwrap_or(defaults.icon_color),
            containers: self.containers.map_or(defaults.containers, PartialContainerSettings::into_complete),
            table: self.table.map_or(defaults.table, PartialTableSettings::into_complete),
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_yields_defaults() {
        let partial: PartialSettings = serde_json::from_str("{}").unwrap();
        let merged = partial.into_complete();
        // updated_at is a write stamp, not a preference; ignore it.
        assert_eq!(merged, Settings { updated_at: merged.updated_at.clone(), ..Settings::default() });
        assert!(merged.follows_last_used());
    }

    #[test]
    fn nested_table_group_backfills_per_key() {
        let json = r#"{ "lastUserId": "u-1", "table": { "pageSize": 25 } }"#;
        let partial: PartialSettings = serde_json::from_str(json).unwrap();
        let merged = partial.into_complete();

        assert_eq!(merged.last_user_id, "u-1");
        assert_eq!(merged.table.page_size, 25);
        assert!(merged.table.show_account_id);
        assert_eq!(merged.containers, ContainerSettings::default());
    }
}
