//! Read-time aggregate of everything the popup needs

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::iam::IamRole;
use crate::types::profile::ApplicationProfile;
use crate::types::settings::Settings;
use crate::types::user::User;

/// Composition of settings, users, profiles and IAM logins, assembled by
/// the aggregate loader. Transient: storage remains the owner of all
/// entities and relationships stay id-based.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateData {
    pub settings: Settings,
    /// Sorted by `updated_at` descending — most recently active first.
    pub users: Vec<User>,
    /// Deduplicated union of every profile referenced by any user.
    pub app_profiles: Vec<ApplicationProfile>,
    /// Flat profile-id → remembered IAM login mapping.
    pub iam_logins: HashMap<String, IamRole>,
    /// Newest user's write stamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
