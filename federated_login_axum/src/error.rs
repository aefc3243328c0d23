use http::StatusCode;

use federated_login::{CoordinationError, OAuth2Error, UserError};

/// Helper trait for converting errors to a standard response error format
pub(super) trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Map coordination failures onto HTTP statuses. Provider-network and
/// persistence failures answer with a generic 500 body so upstream
/// error details never reach the caller.
impl<T> IntoResponseError<T> for Result<T, CoordinationError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| match &e {
            CoordinationError::Unauthenticated | CoordinationError::UserNotFound { .. } => {
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }
            CoordinationError::OAuth2(OAuth2Error::UnknownProvider(_))
            | CoordinationError::OAuth2(OAuth2Error::StateMismatch) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            CoordinationError::User(UserError::DuplicateEmail(_)) => {
                (StatusCode::CONFLICT, e.to_string())
            }
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal authentication error".to_string(),
            ),
        })
    }
}
