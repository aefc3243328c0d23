use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode},
    routing::get,
};
use serde_json::{Value, json};

use federated_login::{User, logout_core};

use super::error::IntoResponseError;
use super::session::AuthUser;

pub(super) fn router() -> Router {
    Router::new()
        .route("/user/info", get(user_info))
        .route("/logout", get(logout))
}

/// The post-login "who am I" query: 200 with the canonical user, or 401
/// via the extractor when the session is missing or stale.
async fn user_info(user: AuthUser) -> Json<User> {
    Json(user.0)
}

/// Invalidate the session named by the request cookie. Idempotent; a
/// request without a session still answers 200.
async fn logout(headers: HeaderMap) -> Result<(HeaderMap, Json<Value>), (StatusCode, String)> {
    let response_headers = logout_core(&headers).await.into_response_error()?;

    Ok((
        response_headers,
        Json(json!({ "message": "Logged out successfully" })),
    ))
}
