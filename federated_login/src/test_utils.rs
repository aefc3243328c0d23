//! Shared test initialization
//!
//! Pins the process-wide stores to a throwaway SQLite file and the
//! in-memory cache, and seeds dummy provider credentials, before any of
//! the `LazyLock` statics are first touched. Tests that reach the
//! stores run under `#[serial]` because the stores are process-wide.

use std::sync::Once;

use crate::userdb::UserStore;

/// Centralized test initialization for all tests across the crate.
pub(crate) async fn init_test_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        // A .env_test can override any of these; defaults keep the
        // suite hermetic.
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }

        let db_path = std::env::temp_dir().join("federated_login_test.db");
        // Start from an empty database file
        let _ = std::fs::remove_file(&db_path);

        set_default_env("GENERIC_DATA_STORE_TYPE", "sqlite");
        set_default_env(
            "GENERIC_DATA_STORE_URL",
            &format!("sqlite:{}?mode=rwc", db_path.display()),
        );
        set_default_env("GENERIC_CACHE_STORE_TYPE", "memory");
        set_default_env("GENERIC_CACHE_STORE_URL", "memory");

        set_default_env("AUTH_ORIGIN", "https://localhost:3443");
        set_default_env("GITHUB_CLIENT_ID", "test_github_client_id");
        set_default_env("GITHUB_CLIENT_SECRET", "test_github_client_secret");
        set_default_env("GOOGLE_CLIENT_ID", "test_google_client_id");
        set_default_env("GOOGLE_CLIENT_SECRET", "test_google_client_secret");
    });

    UserStore::init()
        .await
        .expect("Failed to initialize test user store");
}

fn set_default_env(key: &str, value: &str) {
    if std::env::var(key).is_err() {
        unsafe {
            std::env::set_var(key, value);
        }
    }
}
