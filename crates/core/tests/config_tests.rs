//! Integration tests for config import/export

mod support;

use serde_json::json;
use support::{setup_test_context, test_user};

#[tokio::test]
async fn import_rejects_documents_without_both_sections() {
    let ctx = setup_test_context();

    assert!(!ctx.config.import_user_config("dev@example.com", true, &json!({})).await);
    assert!(
        !ctx.config
            .import_user_config("dev@example.com", true, &json!({ "user": {} }))
            .await
    );
    assert!(
        !ctx.config
            .import_user_config("dev@example.com", true, &json!({ "extension": {} }))
            .await
    );

    // Nothing was written.
    let settings = ctx.settings.load().await.unwrap();
    assert!(settings.updated_at.is_none());
}

#[tokio::test]
async fn import_rejects_malformed_sections() {
    let ctx = setup_test_context();
    let cfg = json!({ "user": "not an object", "extension": {} });
    assert!(!ctx.config.import_user_config("dev@example.com", true, &cfg).await);
}

#[tokio::test]
async fn import_overwrites_settings_and_customization() {
    let ctx = setup_test_context();

    // Pre-existing state that the import should replace.
    let mut user = test_user("dev@example.com", &[]);
    user.custom.display_name = "old name".to_string();
    ctx.users.save_user(&user, true).await.unwrap();

    let cfg = json!({
        "user": { "displayName": "imported", "accountsOverride": true },
        "extension": { "showAllProfiles": true, "table": { "pageSize": 50 } },
    });
    assert!(ctx.config.import_user_config("dev@example.com", true, &cfg).await);

    let settings = ctx.settings.load().await.unwrap();
    assert!(settings.show_all_profiles);
    assert_eq!(settings.table.page_size, 50);
    // Keys absent from the document backfill from defaults.
    assert!(settings.enable_sync);

    let loaded = ctx.users.load_user("dev@example.com", true).await.unwrap();
    assert_eq!(loaded.custom.display_name, "imported");
    assert!(loaded.custom.accounts_override);
}

#[tokio::test]
async fn export_produces_an_importable_document() {
    let ctx = setup_test_context();
    let mut user = test_user("dev@example.com", &[]);
    user.custom.display_name = "dev".to_string();
    ctx.users.save_user(&user, true).await.unwrap();

    let doc = ctx.config.export_user_config("dev@example.com", true).await.unwrap();
    assert_eq!(doc["user"]["displayName"], "dev");
    assert!(doc["extension"].is_object());

    // Round trip through import on a fresh store.
    let fresh = setup_test_context();
    assert!(fresh.config.import_user_config("dev@example.com", true, &doc).await);
    let loaded = fresh.users.load_user("dev@example.com", true).await.unwrap();
    assert_eq!(loaded.custom.display_name, "dev");
}
