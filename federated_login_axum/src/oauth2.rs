use axum::{
    Json, Router,
    extract::{Form, Path, Query},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use serde_json::json;

use federated_login::{
    AUTH_ROUTE_PREFIX, AuthResponse, authorize_callback_core, begin_login_core, provider_names,
};

use super::config::{AUTH_POST_LOGIN_REDIRECT, AUTH_RESPONSE_MODE};
use super::error::IntoResponseError;

pub(super) fn router() -> Router {
    let prefix = AUTH_ROUTE_PREFIX.as_str();

    Router::new()
        .route("/", get(list_providers))
        .route(&format!("{prefix}/{{provider}}"), get(login))
        .route(
            &format!("{prefix}/{{provider}}/callback"),
            get(get_authorized).post(post_authorized),
        )
}

/// The supported provider names, for login pages to enumerate.
async fn list_providers() -> Json<Vec<String>> {
    Json(provider_names())
}

/// Begin the authorization-code flow: redirect the browser to the
/// provider, or hand the URL to an SPA as JSON, per the response mode.
/// Either way the response sets the state-token cookie.
async fn login(Path(provider): Path<String>) -> Result<Response, (StatusCode, String)> {
    let (auth_url, headers) = begin_login_core(&provider).await.into_response_error()?;

    let response = match AUTH_RESPONSE_MODE.as_str() {
        "json" => (headers, Json(json!({ "url": auth_url }))).into_response(),
        _ => (headers, Redirect::to(&auth_url)).into_response(),
    };
    Ok(response)
}

async fn get_authorized(
    Path(provider): Path<String>,
    headers: HeaderMap,
    Query(query): Query<AuthResponse>,
) -> Result<Response, (StatusCode, String)> {
    authorized(&provider, &query, &headers).await
}

/// Providers using form_post deliver the callback as a cross-site POST
/// with the code and state in the form body.
async fn post_authorized(
    Path(provider): Path<String>,
    headers: HeaderMap,
    Form(form): Form<AuthResponse>,
) -> Result<Response, (StatusCode, String)> {
    authorized(&provider, &form, &headers).await
}

async fn authorized(
    provider: &str,
    auth_response: &AuthResponse,
    request_headers: &HeaderMap,
) -> Result<Response, (StatusCode, String)> {
    let (headers, user) = authorize_callback_core(provider, auth_response, request_headers)
        .await
        .into_response_error()?;

    let response = match AUTH_RESPONSE_MODE.as_str() {
        "json" => (headers, Json(user)).into_response(),
        _ => (headers, Redirect::to(AUTH_POST_LOGIN_REDIRECT.as_str())).into_response(),
    };
    Ok(response)
}
