//! Session label builder
//!
//! Turns a label template into the human-readable session/container name.
//! Supported placeholders: `{{user}}`, `{{role}}`, `{{profile}}`,
//! `{{account}}`, `{{accountName}}`.

use rolehop_domain::{ApplicationKind, ApplicationProfile, User};

/// Build the session label for `profile` as `user`.
///
/// AWS-account profiles substitute the template placeholders; the account
/// name placeholder prefers the user's per-account label and falls back
/// to the raw account name. Non-AWS profiles get their custom label (or
/// plain name) with no template substitution.
pub fn build_session_label(
    user: &User,
    profile: &ApplicationProfile,
    template: &str,
    role_name: &str,
) -> String {
    match profile.kind() {
        ApplicationKind::SsoApplication => custom_label_or_name(profile),
        ApplicationKind::AwsAccount => {
            let account_id = profile.account_id().unwrap_or_default();
            let account_label = user
                .custom
                .accounts
                .get(account_id)
                .and_then(|account| account.label.as_deref())
                .or_else(|| profile.account_name())
                .unwrap_or(account_id);
            let display_name = if user.custom.display_name.is_empty() {
                user.user_id.as_str()
            } else {
                user.custom.display_name.as_str()
            };

            template
                .replace("{{user}}", display_name)
                .replace("{{role}}", role_name)
                .replace("{{profile}}", &custom_label_or_name(profile))
                .replace("{{account}}", account_id)
                .replace("{{accountName}}", account_label)
        }
    }
}

fn custom_label_or_name(profile: &ApplicationProfile) -> String {
    profile
        .profile
        .custom
        .as_ref()
        .and_then(|custom| custom.label.clone())
        .unwrap_or_else(|| profile.profile.name.clone())
}
