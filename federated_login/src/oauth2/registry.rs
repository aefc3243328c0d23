use std::collections::HashMap;
use std::env;
use std::sync::LazyLock;

use super::config::{AUTH_ORIGIN, AUTH_ROUTE_PREFIX};
use super::errors::OAuth2Error;
use super::types::{ProfileMapping, ProviderConfig};

/// The statically configured provider set. Populated once at first use
/// and never mutated; resolution is a pure lookup with no side effects.
static PROVIDER_REGISTRY: LazyLock<HashMap<String, ProviderConfig>> = LazyLock::new(|| {
    let providers = [github_config(), google_config()];

    providers
        .into_iter()
        .map(|config| (config.name.clone(), config))
        .collect()
});

fn github_config() -> ProviderConfig {
    provider_config(
        "github",
        "https://github.com/login/oauth/authorize",
        "https://github.com/login/oauth/access_token",
        "https://api.github.com/user",
        &["read:user", "user:email"],
        ProfileMapping {
            user_id: "id",
            email: "email",
            display_name: "name",
            nickname: "login",
            avatar_url: "avatar_url",
        },
    )
}

fn google_config() -> ProviderConfig {
    provider_config(
        "google",
        "https://accounts.google.com/o/oauth2/v2/auth",
        "https://oauth2.googleapis.com/token",
        "https://www.googleapis.com/oauth2/v3/userinfo",
        &["openid", "email", "profile"],
        ProfileMapping {
            user_id: "sub",
            email: "email",
            display_name: "name",
            nickname: "given_name",
            avatar_url: "picture",
        },
    )
}

fn provider_config(
    name: &str,
    auth_url: &str,
    token_url: &str,
    userinfo_url: &str,
    scopes: &[&str],
    mapping: ProfileMapping,
) -> ProviderConfig {
    let upper = name.to_uppercase();

    ProviderConfig {
        name: name.to_string(),
        client_id: env::var(format!("{upper}_CLIENT_ID")).unwrap_or_default(),
        client_secret: env::var(format!("{upper}_CLIENT_SECRET")).unwrap_or_default(),
        auth_url: env_url_override(&upper, "AUTH_URL", auth_url),
        token_url: env_url_override(&upper, "TOKEN_URL", token_url),
        userinfo_url: env_url_override(&upper, "USERINFO_URL", userinfo_url),
        scopes: scopes.iter().map(|s| s.to_string()).collect(),
        redirect_uri: format!(
            "{}{}/{}/callback",
            AUTH_ORIGIN.as_str(),
            AUTH_ROUTE_PREFIX.as_str(),
            name
        ),
        mapping,
    }
}

/// Endpoint URLs accept per-provider environment overrides, e.g.
/// `GITHUB_TOKEN_URL`; the built-in endpoint is used otherwise.
fn env_url_override(provider_upper: &str, suffix: &str, default: &str) -> String {
    match env::var(format!("{provider_upper}_{suffix}")) {
        Ok(url) => {
            tracing::debug!("Using {provider_upper}_{suffix} from environment: {url}");
            url
        }
        Err(_) => default.to_string(),
    }
}

/// Resolve a provider name to its configuration.
pub(crate) fn resolve(name: &str) -> Result<&'static ProviderConfig, OAuth2Error> {
    PROVIDER_REGISTRY
        .get(name)
        .ok_or_else(|| OAuth2Error::UnknownProvider(name.to_string()))
}

/// Names of all supported providers, sorted for a stable listing.
pub fn provider_names() -> Vec<String> {
    let mut names: Vec<String> = PROVIDER_REGISTRY.keys().cloned().collect();
    names.sort();
    names
}

/// Startup validation: every registered provider must carry credentials.
pub(super) fn validate_registry() -> Result<(), OAuth2Error> {
    for config in PROVIDER_REGISTRY.values() {
        if config.client_id.is_empty() || config.client_secret.is_empty() {
            return Err(OAuth2Error::Config(format!(
                "Missing client credentials for provider {}",
                config.name
            )));
        }
    }
    Ok(())
}
