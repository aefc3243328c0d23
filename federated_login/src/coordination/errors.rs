//! Error types for the authentication flow coordination layer

use thiserror::Error;

use crate::oauth2::OAuth2Error;
use crate::session::SessionError;
use crate::userdb::UserError;
use crate::utils::UtilError;

/// Errors that can occur while coordinating an authentication flow.
/// All of them are terminal for the current request; nothing is retried.
#[derive(Error, Debug)]
pub enum CoordinationError {
    /// The session is missing, malformed, expired or revoked
    #[error("Unauthenticated")]
    Unauthenticated,

    /// A valid session references a user that no longer exists: a
    /// data-integrity anomaly, surfaced to callers as 401
    #[error("User {user_id} referenced by session no longer exists")]
    UserNotFound { user_id: String },

    /// Error from OAuth2 operations
    #[error("OAuth2 error: {0}")]
    OAuth2(OAuth2Error),

    /// Error from the user database operations
    #[error("User error: {0}")]
    User(UserError),

    /// Error from session operations
    #[error("Session error: {0}")]
    Session(SessionError),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(UtilError),
}

impl CoordinationError {
    /// Log the error and return self, allowing method chaining at the
    /// point where an error is first constructed.
    pub fn log(self) -> Self {
        match &self {
            Self::Unauthenticated => tracing::debug!("Unauthenticated request"),
            Self::UserNotFound { user_id } => {
                tracing::error!(
                    "Data-integrity anomaly: session references missing user {}",
                    user_id
                )
            }
            Self::OAuth2(err) => tracing::error!("OAuth2 error: {}", err),
            Self::User(err) => tracing::error!("User error: {}", err),
            Self::Session(err) => tracing::error!("Session error: {}", err),
            Self::Utils(err) => tracing::error!("Utils error: {}", err),
        }
        self
    }
}

// Custom From implementations that automatically log errors

impl From<OAuth2Error> for CoordinationError {
    fn from(err: OAuth2Error) -> Self {
        let error = Self::OAuth2(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<UserError> for CoordinationError {
    fn from(err: UserError) -> Self {
        let error = Self::User(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<SessionError> for CoordinationError {
    fn from(err: SessionError) -> Self {
        let error = Self::Session(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<UtilError> for CoordinationError {
    fn from(err: UtilError) -> Self {
        let error = Self::Utils(err);
        tracing::error!("{}", error);
        error
    }
}
