use std::env;
use std::sync::LazyLock;

use super::errors::OAuth2Error;

/// Public origin of this gateway, e.g. `https://login.example.com`.
/// Callback URLs are derived from it, so it is required in production;
/// the fallback only exists so unit tests can build the registry.
pub(crate) static AUTH_ORIGIN: LazyLock<String> = LazyLock::new(|| {
    env::var("AUTH_ORIGIN").unwrap_or_else(|_| "https://localhost:3443".to_string())
});

/// Route prefix under which the axum integration mounts the flow
/// endpoints; part of every provider's registered callback URL.
pub static AUTH_ROUTE_PREFIX: LazyLock<String> =
    LazyLock::new(|| env::var("AUTH_ROUTE_PREFIX").unwrap_or_else(|_| "/auth".to_string()));

pub(crate) static STATE_COOKIE_NAME: LazyLock<String> = LazyLock::new(|| {
    env::var("STATE_COOKIE_NAME").unwrap_or_else(|_| "__Host-AuthState".to_string())
});

/// How long a begin-to-callback round trip may take, in seconds.
pub(crate) static STATE_COOKIE_MAX_AGE: LazyLock<u64> = LazyLock::new(|| {
    env::var("STATE_COOKIE_MAX_AGE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(600)
});

pub(super) fn validate_config() -> Result<(), OAuth2Error> {
    if env::var("AUTH_ORIGIN").is_err() {
        return Err(OAuth2Error::Config(
            "AUTH_ORIGIN must be set".to_string(),
        ));
    }
    Ok(())
}
