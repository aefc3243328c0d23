use http::header::HeaderMap;

use crate::oauth2::{
    AuthResponse, exchange_code_for_token, expire_state_cookie, fetch_user_profile,
    normalize_profile, prepare_auth_request, resolve, state_checks,
};
use crate::session::{
    create_new_session_with_uid, get_user_id_from_session, prepare_logout_response,
};
use crate::userdb::{User, UserStore};

use super::errors::CoordinationError;

/// Begin an authorization attempt: resolve the provider and hand back
/// its authorization URL plus the state-cookie header. The state token
/// travels with the caller; no per-attempt state stays in this process.
pub async fn begin_login_core(provider: &str) -> Result<(String, HeaderMap), CoordinationError> {
    let (auth_url, headers) = prepare_auth_request(provider).await?;
    Ok((auth_url, headers))
}

/// Complete an authorization attempt. The steps run strictly in order
/// (resolve, state check, code exchange, profile fetch, normalization,
/// upsert, session) and a failure at any step aborts before the next
/// side effect. In particular a state mismatch performs no network call
/// and writes nothing.
pub async fn authorize_callback_core(
    provider: &str,
    auth_response: &AuthResponse,
    request_headers: &HeaderMap,
) -> Result<(HeaderMap, User), CoordinationError> {
    let config = resolve(provider)?;

    state_checks(request_headers, &auth_response.state)?;

    let token = exchange_code_for_token(config, &auth_response.code).await?;
    let raw_profile = fetch_user_profile(config, &token.access_token).await?;
    let user = normalize_profile(config, &raw_profile)?;

    let stored_user = UserStore::upsert_user(user).await?;
    tracing::info!(
        "User {} logged in via {}",
        stored_user.id,
        stored_user.provider
    );

    let (mut headers, _session_id) = create_new_session_with_uid(&stored_user.id).await?;
    expire_state_cookie(&mut headers)?;

    Ok((headers, stored_user))
}

/// Tear down the session named by the request's cookie. Idempotent:
/// an absent or already-invalid session still yields the expired-cookie
/// headers.
pub async fn logout_core(request_headers: &HeaderMap) -> Result<HeaderMap, CoordinationError> {
    let headers = prepare_logout_response(request_headers).await?;
    Ok(headers)
}

/// Resolve a session id to the canonical user it belongs to. Absent,
/// invalid or expired sessions are `Unauthenticated`; a live session
/// referencing a vanished user row is logged and surfaced as 401.
pub async fn whoami_core(session_id: Option<&str>) -> Result<User, CoordinationError> {
    let session_id = session_id.ok_or_else(|| CoordinationError::Unauthenticated.log())?;

    let user_id = get_user_id_from_session(session_id)
        .await
        .map_err(|_| CoordinationError::Unauthenticated.log())?;

    let user = UserStore::get_user(&user_id)
        .await?
        .ok_or_else(|| CoordinationError::UserNotFound { user_id }.log())?;

    Ok(user)
}
