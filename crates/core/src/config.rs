//! Import/export of user configuration documents
//!
//! The document format is a single JSON object with top-level `user`
//! (customization) and `extension` (settings) keys. Import is
//! validate-then-apply and reports success as a boolean - no error
//! crosses this boundary.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::warn;

use rolehop_domain::types::customization::PartialCustomization;
use rolehop_domain::types::settings::PartialSettings;
use rolehop_domain::Result;

use crate::settings::SettingsStore;
use crate::storage::keys::StorageKeys;
use crate::storage::ports::KeyValueStore;
use crate::user::UserStore;

/// Import/export surface for `{user, extension}` config documents.
#[derive(Clone)]
pub struct UserConfigService {
    settings: SettingsStore,
    users: UserStore,
}

impl UserConfigService {
    pub fn new(storage: Arc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        Self {
            settings: SettingsStore::new(Arc::clone(&storage), keys.clone()),
            users: UserStore::new(storage, keys),
        }
    }

    /// Apply an imported config document for `user_id`.
    ///
    /// Requires top-level `user` and `extension` keys; on success the
    /// stored Settings and the user's Customization are overwritten
    /// wholesale (missing keys inside either document backfill from
    /// defaults as usual). Returns `false` on any validation or storage
    /// failure.
    pub async fn import_user_config(&self, user_id: &str, use_sync: bool, cfg: &Value) -> bool {
        let (Some(user_cfg), Some(extension_cfg)) = (cfg.get("user"), cfg.get("extension")) else {
            warn!(user_id, "import rejected: missing top-level user/extension keys");
            return false;
        };

        let custom = match serde_json::from_value::<PartialCustomization>(user_cfg.clone()) {
            Ok(partial) => partial.into_complete(),
            Err(err) => {
                warn!(user_id, error = %err, "import rejected: malformed user section");
                return false;
            }
        };
        let settings = match serde_json::from_value::<PartialSettings>(extension_cfg.clone()) {
            Ok(partial) => partial.into_complete(),
            Err(err) => {
                warn!(user_id, error = %err, "import rejected: malformed extension section");
                return false;
            }
        };

        if let Err(err) = self.settings.save(&settings).await {
            warn!(user_id, error = %err, "import failed writing settings");
            return false;
        }
        if let Err(err) = self.users.save_customization(user_id, &custom, use_sync).await {
            warn!(user_id, error = %err, "import failed writing customization");
            return false;
        }
        true
    }

    /// Produce the `{user, extension}` document for `user_id`.
    pub async fn export_user_config(&self, user_id: &str, use_sync: bool) -> Result<Value> {
        let user = self.users.load_user(user_id, use_sync).await?;
        let settings = self.settings.load().await?;
        Ok(json!({
            "user": user.custom,
            "extension": settings,
        }))
    }
}
