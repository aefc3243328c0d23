use serde::Deserialize;

/// Field names under which a provider's user-info payload carries each
/// canonical attribute. Mapping data, not branching code: a new
/// provider contributes a mapping entry, never a new conditional.
#[derive(Debug, Clone)]
pub(crate) struct ProfileMapping {
    pub(crate) user_id: &'static str,
    pub(crate) email: &'static str,
    pub(crate) display_name: &'static str,
    pub(crate) nickname: &'static str,
    pub(crate) avatar_url: &'static str,
}

/// Per-provider OAuth client configuration. Immutable after process
/// start; owned by the registry for the process lifetime.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub name: String,
    pub client_id: String,
    pub client_secret: String,
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
    pub scopes: Vec<String>,
    pub redirect_uri: String,
    pub(crate) mapping: ProfileMapping,
}

/// Query or form payload the provider sends back to the callback.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub code: String,
    pub state: String,
}

/// Token-endpoint response. Held only for the duration of the profile
/// fetch, never persisted.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TokenResponse {
    pub(crate) access_token: String,
    #[allow(dead_code)]
    pub(crate) token_type: Option<String>,
    #[allow(dead_code)]
    pub(crate) scope: Option<String>,
    #[allow(dead_code)]
    pub(crate) expires_in: Option<i64>,
}
