use thiserror::Error;

use crate::utils::UtilError;

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    /// The handle is absent, unknown, malformed or past expiry.
    #[error("Session not found or expired")]
    InvalidSession,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Cookie error: {0}")]
    Cookie(String),

    #[error("Crypto error: {0}")]
    Crypto(String),
}

impl From<UtilError> for SessionError {
    fn from(err: UtilError) -> Self {
        match err {
            UtilError::Crypto(msg) => Self::Crypto(msg),
            UtilError::Cookie(msg) => Self::Cookie(msg),
        }
    }
}
