use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The canonical user identity, independent of which provider asserted it.
///
/// One row exists per provider identity; the natural key is the
/// provider-qualified `id` and `email` is separately unique at the
/// storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct User {
    /// Provider-qualified identifier, `"{provider}:{provider_user_id}"`
    pub id: String,
    /// Name of the provider that asserted this identity
    pub provider: String,
    /// The user's identifier at the provider
    pub provider_user_id: String,
    /// Email address asserted by the provider
    pub email: String,
    /// Display name, empty when the provider did not supply one
    pub display_name: String,
    /// Short handle (GitHub login, Google given name)
    pub nickname: String,
    /// Profile picture URL
    pub avatar_url: String,
    /// When this identity first logged in
    pub created_at: DateTime<Utc>,
    /// When this identity last logged in
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Compose the provider-qualified natural key.
    pub fn composite_id(provider: &str, provider_user_id: &str) -> String {
        format!("{provider}:{provider_user_id}")
    }

    /// Build a user from a normalized profile. `provider` and
    /// `provider_user_id` must be non-empty; the normalizer guarantees
    /// this before construction.
    pub fn new(
        provider: String,
        provider_user_id: String,
        email: String,
        display_name: String,
        nickname: String,
        avatar_url: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Self::composite_id(&provider, &provider_user_id),
            provider,
            provider_user_id,
            email,
            display_name,
            nickname,
            avatar_url,
            created_at: now,
            updated_at: now,
        }
    }
}
