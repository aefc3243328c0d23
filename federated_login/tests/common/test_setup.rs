//! Environment bootstrap for the integration suite
//!
//! Points the GitHub provider entry at the mock server and pins the
//! stores to a throwaway SQLite file, before any LazyLock static is
//! first touched.

use std::sync::Once;

use super::mock_provider::ensure_mock_provider;

pub async fn init_integration_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        let base_url = ensure_mock_provider();

        let db_path = std::env::temp_dir().join("federated_login_integration_test.db");
        let _ = std::fs::remove_file(&db_path);

        set_default_env("GENERIC_DATA_STORE_TYPE", "sqlite");
        set_default_env(
            "GENERIC_DATA_STORE_URL",
            &format!("sqlite:{}?mode=rwc", db_path.display()),
        );
        set_default_env("GENERIC_CACHE_STORE_TYPE", "memory");
        set_default_env("GENERIC_CACHE_STORE_URL", "memory");

        set_default_env("AUTH_ORIGIN", "https://localhost:3443");
        set_default_env("GITHUB_CLIENT_ID", "integration_client_id");
        set_default_env("GITHUB_CLIENT_SECRET", "integration_client_secret");
        set_default_env("GOOGLE_CLIENT_ID", "integration_client_id");
        set_default_env("GOOGLE_CLIENT_SECRET", "integration_client_secret");

        // Route the GitHub network round trips to the mock provider
        set_default_env("GITHUB_TOKEN_URL", &format!("{base_url}/token"));
        set_default_env("GITHUB_USERINFO_URL", &format!("{base_url}/userinfo"));
    });

    federated_login::init()
        .await
        .expect("Failed to initialize integration environment");
}

fn set_default_env(key: &str, value: &str) {
    if std::env::var(key).is_err() {
        unsafe {
            std::env::set_var(key, value);
        }
    }
}
