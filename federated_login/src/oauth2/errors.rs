use thiserror::Error;

use crate::utils::UtilError;

#[derive(Debug, Error, Clone)]
pub enum OAuth2Error {
    /// The provider name does not resolve in the registry.
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// The state echoed by the callback does not match the token issued
    /// at begin. Treated as a potential forgery attempt.
    #[error("State token mismatch")]
    StateMismatch,

    /// Code-to-token exchange failed; carries the upstream status, never
    /// the response body.
    #[error("Token exchange failed: {0}")]
    TokenExchange(String),

    /// User-info fetch failed or returned a malformed body.
    #[error("Fetch user info failed: {0}")]
    FetchUserInfo(String),

    /// The profile is missing the provider-qualified id or the email.
    #[error("Profile normalization failed: {0}")]
    Normalization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Cookie error: {0}")]
    Cookie(String),

    #[error("Serde error: {0}")]
    Serde(String),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}
