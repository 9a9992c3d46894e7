//! Application profiles
//!
//! A profile is one selectable destination: an AWS account/role pair or
//! another SSO-registered application. Raw profiles are persisted once per
//! profile id, independent of which users reference them; a user record
//! merely lists the ids it is entitled to.

use serde::{Deserialize, Serialize};

use crate::constants::AWS_ACCOUNT_APPLICATION;
use crate::types::customization::ProfileCustomization;

/// Search metadata attached to AWS-account profiles by the SSO directory.
/// The wire names are PascalCase as emitted by the directory API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMetadata {
    #[serde(rename = "AccountId", default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(rename = "AccountName", default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
}

/// The profile sub-record: stable id, display name, and the resolved
/// customization block. `custom` is attached by the resolver and never
/// persisted with the raw profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub id: String,
    pub name: String,
    #[serde(skip)]
    pub custom: Option<ProfileCustomization>,
}

/// Typed view of `applicationName`, so resolver branches are exhaustive
/// instead of string comparisons scattered through the code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationKind {
    /// An AWS account/role destination; carries the account identity used
    /// for color inheritance and session labels.
    AwsAccount,
    /// Any other SSO-registered application.
    SsoApplication,
}

/// One selectable destination as stored in browser storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationProfile {
    /// Application this profile belongs to, e.g. `"AWS Account"`.
    pub application_name: String,
    pub profile: ProfileRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_metadata: Option<SearchMetadata>,
}

impl ApplicationProfile {
    /// Tagged view of [`Self::application_name`].
    pub fn kind(&self) -> ApplicationKind {
        if self.application_name == AWS_ACCOUNT_APPLICATION {
            ApplicationKind::AwsAccount
        } else {
            ApplicationKind::SsoApplication
        }
    }

    /// Account id from the search metadata, present on AWS-account
    /// profiles only.
    pub fn account_id(&self) -> Option<&str> {
        self.search_metadata.as_ref().and_then(|meta| meta.account_id.as_deref())
    }

    /// Raw account name from the search metadata.
    pub fn account_name(&self) -> Option<&str> {
        self.search_metadata.as_ref().and_then(|meta| meta.account_name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_is_tagged_on_application_name() {
        let aws = ApplicationProfile {
            application_name: AWS_ACCOUNT_APPLICATION.to_string(),
            ..ApplicationProfile::default()
        };
        let other = ApplicationProfile {
            application_name: "Datadog".to_string(),
            ..ApplicationProfile::default()
        };
        assert_eq!(aws.kind(), ApplicationKind::AwsAccount);
        assert_eq!(other.kind(), ApplicationKind::SsoApplication);
    }

    #[test]
    fn resolved_custom_block_is_not_persisted() {
        let mut profile = ApplicationProfile {
            application_name: AWS_ACCOUNT_APPLICATION.to_string(),
            profile: ProfileRecord {
                id: "p-1".to_string(),
                name: "Developer".to_string(),
                custom: None,
            },
            search_metadata: None,
        };
        profile.profile.custom = Some(ProfileCustomization::with_default_color("222f3e"));

        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("custom"));

        let parsed: ApplicationProfile = serde_json::from_str(&json).unwrap();
        assert!(parsed.profile.custom.is_none());
    }
}
