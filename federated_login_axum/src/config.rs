use std::sync::LazyLock;

/// Transport for the begin and callback responses. `redirect` serves
/// browser-navigation deployments; `json` serves SPA deployments that
/// fetch the authorization URL and receive the user as JSON.
pub static AUTH_RESPONSE_MODE: LazyLock<String> = LazyLock::new(|| {
    let mode = std::env::var("AUTH_RESPONSE_MODE").unwrap_or("redirect".to_string());
    match mode.to_lowercase().as_str() {
        "redirect" => "redirect".to_string(),
        "json" => "json".to_string(),
        _ => {
            panic!("Invalid AUTH_RESPONSE_MODE '{mode}'. Must be 'redirect' or 'json'.");
        }
    }
});

/// Where a successful redirect-mode callback sends the browser.
pub static AUTH_POST_LOGIN_REDIRECT: LazyLock<String> =
    LazyLock::new(|| std::env::var("AUTH_POST_LOGIN_REDIRECT").unwrap_or("/".to_string()));
