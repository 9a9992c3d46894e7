//! User records
//!
//! A user is one signed-in SSO identity. The user record owns an ordered
//! list of application-profile ids; the profiles themselves are stored
//! under their own keys. Customization is stored under a separate key and
//! attached here at read time — it is never persisted inside the user
//! record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::customization::Customization;

/// Per-user record as stored in browser storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable identifier (subject/email).
    #[serde(default)]
    pub user_id: String,
    /// SSO directory reference, e.g. `d-1234567890`.
    #[serde(default)]
    pub managed_active_directory_id: String,
    /// Ordered set of profile ids this user is entitled to.
    #[serde(default)]
    pub app_profile_ids: Vec<String>,
    /// Stamped on every save; users sort most-recent-first on this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Attached at read time from the separately-stored customization
    /// record; cleared before the user record itself is written.
    #[serde(skip)]
    pub custom: Customization,
}

impl User {
    /// Whether a stored record was actually found for this user. A missing
    /// record loads as an empty `User` with customization attached, so
    /// callers must not treat field access as proof of existence.
    pub fn is_present(&self) -> bool {
        !self.user_id.is_empty()
    }

    /// Whether this user is entitled to the given profile id.
    pub fn owns_profile(&self, profile_id: &str) -> bool {
        self.app_profile_ids.iter().any(|id| id == profile_id)
    }
}
