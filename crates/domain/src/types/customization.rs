//! Per-user customization records
//!
//! Customization is user-owned display/behavior preference data layered on
//! top of raw profile data. It is stored separately from the user record
//! (possibly in a different storage area) and attached at read time.
//!
//! ## Backfill invariant
//!
//! Stored records may predate any number of schema additions. Loading goes
//! through [`PartialCustomization`]: every field a stored record lacks is
//! backfilled from [`Customization::default`], and present fields are never
//! overwritten. After loading, the record always carries the full key set.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_PROFILE_COLOR, DEFAULT_SESSION_LABEL_IAM, DEFAULT_SESSION_LABEL_SSO,
};
use crate::types::iam::IamRole;

/// Account-level display overrides, keyed by account id on
/// [`Customization::accounts`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountCustomization {
    /// Friendly label shown instead of the raw account name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Account-level color, inherited by profiles per the resolver rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Per-profile overrides, keyed by profile id on
/// [`Customization::profiles`]. Also used as the resolved `custom` block
/// attached to each profile at resolution time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCustomization {
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub hide: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Remembered IAM role-assumption targets reachable from this profile.
    #[serde(default)]
    pub iam_roles: Vec<IamRole>,
    /// Profile-level color. `None` means "never set"; the resolver fills in
    /// the user's default color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ProfileCustomization {
    /// Fresh default block for a profile with no stored overrides.
    pub fn with_default_color(color_default: &str) -> Self {
        Self {
            favorite: false,
            hide: false,
            label: None,
            iam_roles: Vec::new(),
            color: Some(color_default.to_string()),
        }
    }
}

/// Popup hotkey bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotkeys {
    pub focus_search: String,
    pub open_first: String,
    pub toggle_favorites: String,
}

impl Default for Hotkeys {
    fn default() -> Self {
        Self {
            focus_search: "/".to_string(),
            open_first: "Enter".to_string(),
            toggle_favorites: "f".to_string(),
        }
    }
}

/// Per-user preferences layered on top of raw profile data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customization {
    /// Account-id → display overrides.
    pub accounts: HashMap<String, AccountCustomization>,
    /// When true, an account-level color always wins over a profile-level
    /// color; when false it only wins over an unset/default profile color.
    pub accounts_override: bool,
    /// Display name substituted for `{{user}}` in session labels.
    pub display_name: String,
    /// Session label template for SSO console sessions.
    pub session_label_sso: String,
    /// Session label template for IAM switch-role sessions.
    pub session_label_iam: String,
    /// Color applied to profiles without an explicit color override.
    pub color_default: String,
    pub color_header: bool,
    pub color_footer: bool,
    pub label_header: bool,
    pub label_footer: bool,
    /// Profile-id → per-profile overrides.
    pub profiles: HashMap<String, ProfileCustomization>,
    pub hotkeys: Hotkeys,
}

impl Default for Customization {
    fn default() -> Self {
        Self {
            accounts: HashMap::new(),
            accounts_override: false,
            display_name: String::new(),
            session_label_sso: DEFAULT_SESSION_LABEL_SSO.to_string(),
            session_label_iam: DEFAULT_SESSION_LABEL_IAM.to_string(),
            color_default: DEFAULT_PROFILE_COLOR.to_string(),
            color_header: false,
            color_footer: false,
            label_header: false,
            label_footer: false,
            profiles: HashMap::new(),
            hotkeys: Hotkeys::default(),
        }
    }
}

/// Stored form of [`Hotkeys`] where any binding may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialHotkeys {
    pub focus_search: Option<String>,
    pub open_first: Option<String>,
    pub toggle_favorites: Option<String>,
}

impl PartialHotkeys {
    fn into_complete(self) -> Hotkeys {
        let defaults = Hotkeys::default();
        Hotkeys {
            focus_search: self.focus_search.unwrap_or(defaults.focus_search),
            open_first: self.open_first.unwrap_or(defaults.open_first),
            toggle_favorites: self.toggle_favorites.unwrap_or(defaults.toggle_favorites),
        }
    }
}

/// Stored form of [`Customization`] where any key may be absent.
///
/// Present vs absent is explicit (`Some` vs `None`); the third state —
/// the default — only appears in the output of [`Self::into_complete`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialCustomization {
    pub accounts: Option<HashMap<String, AccountCustomization>>,
    pub accounts_override: Option<bool>,
    pub display_name: Option<String>,
    pub session_label_sso: Option<String>,
    pub session_label_iam: Option<String>,
    pub color_default: Option<String>,
    pub color_header: Option<bool>,
    pub color_footer: Option<bool>,
    pub label_header: Option<bool>,
    pub label_footer: Option<bool>,
    pub profiles: Option<HashMap<String, ProfileCustomization>>,
    pub hotkeys: Option<PartialHotkeys>,
}

impl PartialCustomization {
    /// Merge stored fields over a fresh default record.
    pub fn into_complete(self) -> Customization {
        let defaults = Customization::default();
        Customization {
            accounts: self.accounts.unwrap_or(defaults.accounts),
            accounts_override: self.accounts_override.unwrap_or(defaults.accounts_override),
            display_name: self.display_name.unwrap_or(defaults.display_name),
            session_label_sso: self.session_label_sso.unwrap_or(defaults.session_label_sso),
            session_label_iam: self.session_label_iam.unwrap_or(defaults.session_label_iam),
            color_default: self.color_default.unwrap_or(defaults.color_default),
            color_header: self.color_header.unwrap_or(defaults.color_header),
            color_footer: self.color_footer.unwrap_or(defaults.color_footer),
            label_header: self.label_header.unwrap_or(defaults.label_header),
            label_footer: self.label_footer.unwrap_or(defaults.label_footer),
            profiles: self.profiles.unwrap_or(defaults.profiles),
            hotkeys: self.hotkeys.map_or(defaults.hotkeys, PartialHotkeys::into_complete),
        }
    }
}
