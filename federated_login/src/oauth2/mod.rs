mod config;
mod core;
mod errors;
mod normalize;
mod registry;
mod types;

pub use config::AUTH_ROUTE_PREFIX;
pub use errors::OAuth2Error;
pub use registry::provider_names;
pub use types::AuthResponse;

pub(crate) use core::{
    exchange_code_for_token, expire_state_cookie, fetch_user_profile, prepare_auth_request,
    state_checks,
};
pub(crate) use normalize::normalize_profile;
pub(crate) use registry::resolve;

pub(crate) async fn init() -> Result<(), OAuth2Error> {
    // Validate required environment variables early
    config::validate_config()?;
    registry::validate_registry()?;

    // Initialize the storage layer
    crate::storage::init()
        .await
        .map_err(|e| OAuth2Error::Storage(e.to_string()))?;

    Ok(())
}
