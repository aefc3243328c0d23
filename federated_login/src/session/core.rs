use chrono::{Duration, Utc};
use http::header::HeaderMap;

use crate::session::config::{SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME};
use crate::session::errors::SessionError;
use crate::session::types::StoredSession;
use crate::storage::GENERIC_CACHE_STORE;
use crate::utils::{gen_random_string, get_cookie_from_headers, header_set_cookie};

const SESSION_CACHE_PREFIX: &str = "session";

/// Create a server-side session for the user and return the Set-Cookie
/// headers together with the new session id. The TTL is fixed from this
/// moment; validation never extends it.
pub(crate) async fn create_new_session_with_uid(
    user_id: &str,
) -> Result<(HeaderMap, String), SessionError> {
    let session_id = gen_random_string(32)?;
    let ttl = *SESSION_COOKIE_MAX_AGE;
    let expires_at = Utc::now() + Duration::seconds(ttl as i64);

    let stored_session = StoredSession {
        user_id: user_id.to_string(),
        expires_at,
        ttl,
    };

    GENERIC_CACHE_STORE
        .lock()
        .await
        .put_with_ttl(
            SESSION_CACHE_PREFIX,
            &session_id,
            stored_session.into(),
            ttl as usize,
        )
        .await
        .map_err(|e| SessionError::Storage(e.to_string()))?;

    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        SESSION_COOKIE_NAME.as_str(),
        &session_id,
        ttl as i64,
        "Strict",
    )?;

    Ok((headers, session_id))
}

/// Resolve a session id to its user id. Unknown, malformed or expired
/// sessions fail with `InvalidSession`; expired records are removed on
/// sight so the cache does not accumulate dead sessions.
pub(crate) async fn get_user_id_from_session(session_id: &str) -> Result<String, SessionError> {
    let cached_session = GENERIC_CACHE_STORE
        .lock()
        .await
        .get(SESSION_CACHE_PREFIX, session_id)
        .await
        .map_err(|e| SessionError::Storage(e.to_string()))?
        .ok_or(SessionError::InvalidSession)?;

    let stored_session: StoredSession = cached_session.try_into()?;

    if stored_session.expires_at < Utc::now() {
        tracing::debug!("Session expired at {}", stored_session.expires_at);
        delete_session_from_store_by_session_id(session_id).await?;
        return Err(SessionError::InvalidSession);
    }

    Ok(stored_session.user_id)
}

/// Remove a session record. Removing an absent session is not an error.
pub(crate) async fn delete_session_from_store_by_session_id(
    session_id: &str,
) -> Result<(), SessionError> {
    GENERIC_CACHE_STORE
        .lock()
        .await
        .remove(SESSION_CACHE_PREFIX, session_id)
        .await
        .map_err(|e| SessionError::Storage(e.to_string()))?;
    Ok(())
}

/// Build the logout response: an already-expired session cookie plus
/// removal of the server-side record. Idempotent; a missing or unknown
/// cookie still yields the expired-cookie headers.
pub(crate) async fn prepare_logout_response(headers: &HeaderMap) -> Result<HeaderMap, SessionError> {
    let mut response_headers = HeaderMap::new();
    header_set_cookie(
        &mut response_headers,
        SESSION_COOKIE_NAME.as_str(),
        "",
        -86400,
        "Strict",
    )?;

    if let Some(session_id) = get_session_id_from_headers(headers) {
        delete_session_from_store_by_session_id(session_id).await?;
    }

    Ok(response_headers)
}

/// Extract the session id from a request's Cookie header, if present.
pub(crate) fn get_session_id_from_headers(headers: &HeaderMap) -> Option<&str> {
    let session_id = get_cookie_from_headers(headers, SESSION_COOKIE_NAME.as_str());
    if session_id.is_none() {
        tracing::debug!(
            "No session cookie '{}' found in request",
            SESSION_COOKIE_NAME.as_str()
        );
    }
    session_id
}
