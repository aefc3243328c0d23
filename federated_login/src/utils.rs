use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use http::header::{COOKIE, HeaderMap, SET_COOKIE};
use ring::rand::SecureRandom;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum UtilError {
    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("Cookie error: {0}")]
    Cookie(String),
}

pub(crate) fn base64url_encode(input: Vec<u8>) -> Result<String, UtilError> {
    Ok(URL_SAFE_NO_PAD.encode(input))
}

/// Generate `len` random bytes and return them base64url-encoded.
pub fn gen_random_string(len: usize) -> Result<String, UtilError> {
    let rng = ring::rand::SystemRandom::new();
    let mut bytes = vec![0u8; len];
    rng.fill(&mut bytes)
        .map_err(|_| UtilError::Crypto("Failed to generate random string".to_string()))?;
    base64url_encode(bytes)
}

/// Append a Set-Cookie header. All cookies issued by this crate are
/// host-only, HttpOnly and Secure; the SameSite attribute varies per
/// cookie (the state cookie must survive the provider redirect).
pub(crate) fn header_set_cookie(
    headers: &mut HeaderMap,
    name: &str,
    value: &str,
    max_age: i64,
    same_site: &str,
) -> Result<(), UtilError> {
    let cookie =
        format!("{name}={value}; SameSite={same_site}; Secure; HttpOnly; Path=/; Max-Age={max_age}");
    headers.append(
        SET_COOKIE,
        cookie
            .parse()
            .map_err(|_| UtilError::Cookie("Failed to parse cookie".to_string()))?,
    );
    Ok(())
}

/// Find a cookie by name in a raw Cookie header. Returns None when the
/// header is absent or unparseable.
pub(crate) fn get_cookie_from_headers<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    let cookie_header = headers.get(COOKIE)?;
    let Ok(cookie_str) = cookie_header.to_str() else {
        tracing::debug!("Cookie header is not valid UTF-8");
        return None;
    };

    cookie_str.split(';').map(|s| s.trim()).find_map(|s| {
        let mut parts = s.splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(k), Some(v)) if k == name => Some(v),
            _ => None,
        }
    })
}
