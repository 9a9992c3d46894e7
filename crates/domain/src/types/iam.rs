//! Remembered IAM role-assumption targets

use serde::{Deserialize, Serialize};

/// A remembered manual (non-SSO) role-assumption target, keyed by the
/// profile it was assumed from. The registry stores these as a flat
/// `profileId → IamRole` mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IamRole {
    pub profile_id: String,
    pub role_name: String,
    pub account_id: String,
}
