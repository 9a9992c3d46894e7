//! Storage key templating
//!
//! Every extension-owned key is prefixed with the configured extension
//! name so several builds (dev/beta/release) can share a browser profile
//! without clobbering each other. Application-profile records are the one
//! exception: they are keyed by their own profile id, unprefixed, because
//! the id is already globally unique and the records are shared between
//! users.

use rolehop_domain::constants::DEFAULT_EXTENSION_NAME;

/// Builder for the extension's storage keys.
#[derive(Debug, Clone)]
pub struct StorageKeys {
    prefix: String,
}

impl StorageKeys {
    pub fn new(extension_name: &str) -> Self {
        Self { prefix: extension_name.to_string() }
    }

    /// `{name}-settings`
    pub fn settings(&self) -> String {
        format!("{}-settings", self.prefix)
    }

    /// `{name}-users` — the global user-id list.
    pub fn users(&self) -> String {
        format!("{}-users", self.prefix)
    }

    /// `{name}-user-{id}`
    pub fn user(&self, user_id: &str) -> String {
        format!("{}-user-{}", self.prefix, user_id)
    }

    /// `{name}-custom-{id}`
    pub fn custom(&self, user_id: &str) -> String {
        format!("{}-custom-{}", self.prefix, user_id)
    }

    /// `{name}-iam-logins`
    pub fn iam_logins(&self) -> String {
        format!("{}-iam-logins", self.prefix)
    }

    /// Application profiles are stored under their raw id.
    pub fn profile(&self, profile_id: &str) -> String {
        profile_id.to_string()
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSION_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_carry_the_extension_prefix() {
        let keys = StorageKeys::new("rolehop-beta");
        assert_eq!(keys.settings(), "rolehop-beta-settings");
        assert_eq!(keys.users(), "rolehop-beta-users");
        assert_eq!(keys.user("dev@example.com"), "rolehop-beta-user-dev@example.com");
        assert_eq!(keys.custom("dev@example.com"), "rolehop-beta-custom-dev@example.com");
        assert_eq!(keys.iam_logins(), "rolehop-beta-iam-logins");
    }

    #[test]
    fn profile_keys_are_unprefixed() {
        let keys = StorageKeys::default();
        assert_eq!(keys.profile("p-1234"), "p-1234");
    }
}
