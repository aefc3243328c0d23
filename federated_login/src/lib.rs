//! federated-login - Federated-login gateway core
//!
//! This crate brokers OAuth 2.0 authorization-code flows against a
//! statically configured set of identity providers, normalizes each
//! provider's profile into a canonical user record, and establishes the
//! server-side session downstream services trust. HTTP routing lives in
//! the companion `federated-login-axum` crate.

mod coordination;
mod oauth2;
mod session;
mod storage;
mod userdb;
mod utils;

#[cfg(test)]
mod test_utils;

// Re-export the main coordination components
pub use coordination::{
    CoordinationError, authorize_callback_core, begin_login_core, logout_core, whoami_core,
};

pub use oauth2::{AUTH_ROUTE_PREFIX, AuthResponse, OAuth2Error, provider_names};

pub use session::{SESSION_COOKIE_NAME, SessionError};
pub use userdb::{User, UserError};

use session::get_session_id_from_headers;

/// Extract the session id carried by a request's Cookie header, if any.
/// The handed-back id still has to pass validation in [`whoami_core`].
pub fn session_id_from_headers(headers: &http::HeaderMap) -> Option<&str> {
    get_session_id_from_headers(headers)
}

/// Initialize the gateway: validate provider and origin configuration,
/// connect the stores and create the user table.
pub async fn init() -> Result<(), Box<dyn std::error::Error>> {
    oauth2::init().await?;
    userdb::init().await?;
    Ok(())
}
