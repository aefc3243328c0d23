use std::sync::LazyLock;
use std::time::Duration;

use http::header::HeaderMap;
use subtle::ConstantTimeEq;
use url::Url;

use crate::utils::{gen_random_string, get_cookie_from_headers, header_set_cookie};

use super::config::{STATE_COOKIE_MAX_AGE, STATE_COOKIE_NAME};
use super::errors::OAuth2Error;
use super::registry::resolve;
use super::types::{ProviderConfig, TokenResponse};

/// Shared HTTP client. Both provider round trips go through it, so the
/// timeout bounds every network call in the callback path. GitHub's API
/// rejects requests without a User-Agent.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .user_agent("federated-login")
        .build()
        .expect("Failed to build HTTP client")
});

fn get_client() -> &'static reqwest::Client {
    &HTTP_CLIENT
}

/// Build the provider's authorization URL with a fresh state token and
/// return it together with the Set-Cookie header carrying that token.
/// The state binding lives entirely in the caller's cookie; nothing is
/// held in server memory between begin and callback.
pub(crate) async fn prepare_auth_request(
    provider: &str,
) -> Result<(String, HeaderMap), OAuth2Error> {
    let config = resolve(provider)?;

    let state_token = gen_random_string(32)?;

    let mut auth_url = Url::parse(&config.auth_url)
        .map_err(|e| OAuth2Error::Config(format!("Invalid authorize endpoint: {e}")))?;
    auth_url
        .query_pairs_mut()
        .append_pair("client_id", &config.client_id)
        .append_pair("redirect_uri", &config.redirect_uri)
        .append_pair("response_type", "code")
        .append_pair("scope", &config.scopes.join(" "))
        .append_pair("state", &state_token);

    // The provider redirect that delivers the callback is a cross-site
    // navigation, so the state cookie must be Lax, not Strict.
    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        STATE_COOKIE_NAME.as_str(),
        &state_token,
        *STATE_COOKIE_MAX_AGE as i64,
        "Lax",
    )?;

    tracing::debug!("Authorization URL for {}: {}", provider, auth_url);

    Ok((auth_url.into(), headers))
}

/// Compare the state echoed by the provider against the token issued at
/// begin. A missing cookie or a mismatch is a potential forgery attempt
/// and is logged as such before failing.
pub(crate) fn state_checks(headers: &HeaderMap, state: &str) -> Result<(), OAuth2Error> {
    let Some(issued_state) = get_cookie_from_headers(headers, STATE_COOKIE_NAME.as_str()) else {
        tracing::warn!("Possible forgery: callback without a state cookie");
        return Err(OAuth2Error::StateMismatch);
    };

    if !bool::from(issued_state.as_bytes().ct_eq(state.as_bytes())) {
        tracing::warn!("Possible forgery: callback state does not match the issued token");
        return Err(OAuth2Error::StateMismatch);
    }

    Ok(())
}

/// Build the Set-Cookie header that retires the state cookie once the
/// callback has consumed it.
pub(crate) fn expire_state_cookie(headers: &mut HeaderMap) -> Result<(), OAuth2Error> {
    header_set_cookie(headers, STATE_COOKIE_NAME.as_str(), "", -86400, "Lax")?;
    Ok(())
}

/// Exchange the authorization code for an access token. Codes are
/// single-use, so a failure is surfaced immediately and never retried.
pub(crate) async fn exchange_code_for_token(
    config: &ProviderConfig,
    code: &str,
) -> Result<TokenResponse, OAuth2Error> {
    let client = get_client();
    let response = client
        .post(&config.token_url)
        // GitHub answers with urlencoded form data unless asked for JSON
        .header(reqwest::header::ACCEPT, "application/json")
        .form(&[
            ("code", code),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await
        .map_err(|e| {
            tracing::error!("Token exchange with {} failed: {}", config.name, e);
            OAuth2Error::TokenExchange(e.to_string())
        })?;

    let status = response.status();
    if !status.is_success() {
        tracing::error!(
            "Token endpoint of {} answered with status {}",
            config.name,
            status
        );
        return Err(OAuth2Error::TokenExchange(status.to_string()));
    }

    let token_response: TokenResponse = response.json().await.map_err(|e| {
        tracing::error!("Malformed token response from {}: {}", config.name, e);
        OAuth2Error::TokenExchange("Malformed token response".to_string())
    })?;

    Ok(token_response)
}

/// Fetch the raw user profile from the provider's user-info endpoint.
pub(crate) async fn fetch_user_profile(
    config: &ProviderConfig,
    access_token: &str,
) -> Result<serde_json::Value, OAuth2Error> {
    let client = get_client();
    let response = client
        .get(&config.userinfo_url)
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|e| {
            tracing::error!("User-info fetch from {} failed: {}", config.name, e);
            OAuth2Error::FetchUserInfo(e.to_string())
        })?;

    let status = response.status();
    if !status.is_success() {
        tracing::error!(
            "User-info endpoint of {} answered with status {}",
            config.name,
            status
        );
        return Err(OAuth2Error::FetchUserInfo(status.to_string()));
    }

    let profile: serde_json::Value = response.json().await.map_err(|e| {
        tracing::error!("Malformed user-info body from {}: {}", config.name, e);
        OAuth2Error::FetchUserInfo("Malformed user-info body".to_string())
    })?;

    tracing::debug!("Raw {} profile: {:#?}", config.name, profile);
    Ok(profile)
}
