//! Profile resolver - layers per-user customization over raw profiles
//!
//! The one nontrivial business rule in the system is the account-color
//! inheritance applied here: an account-level color wins over an
//! unset/default profile color, but never silently overwrites an explicit
//! profile-level color unless the user forces it with `accounts_override`.

use rolehop_domain::{ApplicationKind, ApplicationProfile, ProfileCustomization, User};

/// Produce the customized view of `raw_profiles` for `user`.
///
/// Every returned profile carries a `custom` block: the user's stored
/// per-profile overrides when present, otherwise a fresh default block
/// (not favorite, not hidden, no label, no IAM roles, the user's default
/// color).
pub fn customize(user: &User, raw_profiles: &[ApplicationProfile]) -> Vec<ApplicationProfile> {
    raw_profiles
        .iter()
        .map(|raw| {
            let mut profile = raw.clone();

            let mut block = user
                .custom
                .profiles
                .get(&profile.profile.id)
                .cloned()
                .unwrap_or_else(|| {
                    ProfileCustomization::with_default_color(&user.custom.color_default)
                });
            // A stored override predating the color field still resolves
            // to the user's default color.
            if block.color.is_none() {
                block.color = Some(user.custom.color_default.clone());
            }

            match profile.kind() {
                ApplicationKind::AwsAccount => {
                    apply_account_color(user, &profile, &mut block);
                }
                ApplicationKind::SsoApplication => {}
            }

            profile.profile.custom = Some(block);
            profile
        })
        .collect()
}

/// Account-color inheritance for AWS-account profiles.
///
/// The account color applies when `accounts_override` is set, or when the
/// profile's current color still equals the user's default color.
fn apply_account_color(user: &User, profile: &ApplicationProfile, block: &mut ProfileCustomization) {
    let Some(account_id) = profile.account_id() else {
        return;
    };
    let Some(account) = user.custom.accounts.get(account_id) else {
        return;
    };
    let Some(account_color) = &account.color else {
        return;
    };

    let current = block.color.as_deref().unwrap_or(&user.custom.color_default);
    if user.custom.accounts_override || current == user.custom.color_default {
        block.color = Some(account_color.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolehop_domain::constants::AWS_ACCOUNT_APPLICATION;
    use rolehop_domain::{AccountCustomization, ProfileRecord, SearchMetadata};

    fn aws_profile(id: &str, account_id: &str) -> ApplicationProfile {
        ApplicationProfile {
            application_name: AWS_ACCOUNT_APPLICATION.to_string(),
            profile: ProfileRecord { id: id.to_string(), name: "Developer".to_string(), custom: None },
            search_metadata: Some(SearchMetadata {
                account_id: Some(account_id.to_string()),
                account_name: Some("dev-account".to_string()),
            }),
        }
    }

    fn user_with_account_color(account_id: &str, color: &str) -> User {
        let mut user = User { user_id: "dev@example.com".to_string(), ..User::default() };
        user.custom.accounts.insert(
            account_id.to_string(),
            AccountCustomization { label: None, color: Some(color.to_string()) },
        );
        user
    }

    #[test]
    fn default_block_attached_when_no_override_exists() {
        let user = User { user_id: "dev@example.com".to_string(), ..User::default() };
        let resolved = customize(&user, &[aws_profile("p-1", "111111111111")]);
        let block = resolved[0].profile.custom.as_ref().unwrap();

        assert!(!block.favorite);
        assert!(!block.hide);
        assert!(block.label.is_none());
        assert!(block.iam_roles.is_empty());
        assert_eq!(block.color.as_deref(), Some(user.custom.color_default.as_str()));
    }

    #[test]
    fn account_color_wins_over_default_profile_color() {
        // Profile color explicitly set to the user's default still counts
        // as "default" for inheritance purposes.
        let mut user = user_with_account_color("111111111111", "ff0000");
        user.custom.profiles.insert(
            "p-1".to_string(),
            ProfileCustomization {
                color: Some(user.custom.color_default.clone()),
                ..ProfileCustomization::default()
            },
        );

        let resolved = customize(&user, &[aws_profile("p-1", "111111111111")]);
        let block = resolved[0].profile.custom.as_ref().unwrap();
        assert_eq!(block.color.as_deref(), Some("ff0000"));
    }

    #[test]
    fn explicit_profile_color_survives_without_override() {
        let mut user = user_with_account_color("111111111111", "ff0000");
        user.custom.profiles.insert(
            "p-1".to_string(),
            ProfileCustomization {
                color: Some("00ff00".to_string()),
                ..ProfileCustomization::default()
            },
        );

        let resolved = customize(&user, &[aws_profile("p-1", "111111111111")]);
        let block = resolved[0].profile.custom.as_ref().unwrap();
        assert_eq!(block.color.as_deref(), Some("00ff00"));
    }

    #[test]
    fn accounts_override_forces_account_color() {
        let mut user = user_with_account_color("111111111111", "ff0000");
        user.custom.accounts_override = true;
        user.custom.profiles.insert(
            "p-1".to_string(),
            ProfileCustomization {
                color: Some("00ff00".to_string()),
                ..ProfileCustomization::default()
            },
        );

        let resolved = customize(&user, &[aws_profile("p-1", "111111111111")]);
        let block = resolved[0].profile.custom.as_ref().unwrap();
        assert_eq!(block.color.as_deref(), Some("ff0000"));
    }

    #[test]
    fn non_aws_profiles_never_inherit_account_colors() {
        let mut user = user_with_account_color("111111111111", "ff0000");
        user.custom.accounts_override = true;

        let mut profile = aws_profile("p-1", "111111111111");
        profile.application_name = "Datadog".to_string();

        let resolved = customize(&user, &[profile]);
        let block = resolved[0].profile.custom.as_ref().unwrap();
        assert_eq!(block.color.as_deref(), Some(user.custom.color_default.as_str()));
    }
}
