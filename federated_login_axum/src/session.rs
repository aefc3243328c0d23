use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use http::{StatusCode, request::Parts};
use std::ops::Deref;

use federated_login::{User, session_id_from_headers, whoami_core};

/// Authenticated user, available as an axum extractor.
///
/// The extractor resolves the request's session cookie to a canonical
/// user; handlers taking `AuthUser` reject unauthenticated requests
/// with 401, handlers taking `Option<AuthUser>` see `None` instead.
///
/// # Example
///
/// ```no_run
/// use axum::{routing::get, Router};
/// use federated_login_axum::AuthUser;
///
/// async fn protected_handler(user: AuthUser) -> String {
///     format!("Hello, {}!", user.display_name)
/// }
///
/// let app: Router = Router::new()
///     .route("/protected", get(protected_handler));
/// ```
#[derive(Clone, Debug)]
pub struct AuthUser(pub User);

impl Deref for AuthUser {
    type Target = User;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session_id = session_id_from_headers(&parts.headers).map(str::to_owned);

        match whoami_core(session_id.as_deref()).await {
            Ok(user) => Ok(AuthUser(user)),
            Err(e) => {
                tracing::debug!("Rejecting unauthenticated request: {}", e);
                Err((StatusCode::UNAUTHORIZED, "Unauthorized"))
            }
        }
    }
}

impl<S> OptionalFromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        let session_id = session_id_from_headers(&parts.headers).map(str::to_owned);

        Ok(whoami_core(session_id.as_deref()).await.ok().map(AuthUser))
    }
}
