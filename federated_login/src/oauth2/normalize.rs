use serde_json::Value;

use crate::userdb::User;

use super::errors::OAuth2Error;
use super::types::ProviderConfig;

/// Map a provider's raw user-info payload onto the canonical user shape
/// using the provider's field mapping. The provider-qualified id and the
/// email are required; everything else degrades to an empty string.
pub(crate) fn normalize_profile(
    config: &ProviderConfig,
    raw: &Value,
) -> Result<User, OAuth2Error> {
    let mapping = &config.mapping;

    let provider_user_id = field_as_string(raw, mapping.user_id).ok_or_else(|| {
        OAuth2Error::Normalization(format!(
            "{} profile is missing the '{}' field",
            config.name, mapping.user_id
        ))
    })?;

    let email = field_as_string(raw, mapping.email)
        .filter(|e| !e.is_empty())
        .ok_or_else(|| {
            OAuth2Error::Normalization(format!(
                "{} profile is missing the '{}' field",
                config.name, mapping.email
            ))
        })?;

    Ok(User::new(
        config.name.clone(),
        provider_user_id,
        email,
        field_as_string(raw, mapping.display_name).unwrap_or_default(),
        field_as_string(raw, mapping.nickname).unwrap_or_default(),
        field_as_string(raw, mapping.avatar_url).unwrap_or_default(),
    ))
}

/// GitHub serves numeric ids, Google string ones; both become strings.
fn field_as_string(raw: &Value, field: &str) -> Option<String> {
    match raw.get(field)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oauth2::registry::resolve;
    use serde_json::json;

    #[test]
    fn test_normalize_github_profile() {
        let config = resolve("github").unwrap();
        let raw = json!({
            "id": "42",
            "email": "a@x.com",
            "name": "A",
            "login": "a-handle",
            "avatar_url": "https://avatars.githubusercontent.com/u/42"
        });

        let user = normalize_profile(config, &raw).unwrap();

        assert_eq!(user.provider, "github");
        assert_eq!(user.provider_user_id, "42");
        assert_eq!(user.id, "github:42");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.display_name, "A");
        assert_eq!(user.nickname, "a-handle");
    }

    #[test]
    fn test_normalize_github_numeric_id() {
        let config = resolve("github").unwrap();
        let raw = json!({"id": 42, "email": "a@x.com", "name": "A"});

        let user = normalize_profile(config, &raw).unwrap();
        assert_eq!(user.provider_user_id, "42");
    }

    #[test]
    fn test_normalize_google_profile() {
        let config = resolve("google").unwrap();
        let raw = json!({
            "sub": "108296",
            "email": "g@x.com",
            "name": "G User",
            "given_name": "G",
            "picture": "https://lh3.googleusercontent.com/a/108296"
        });

        let user = normalize_profile(config, &raw).unwrap();

        assert_eq!(user.provider, "google");
        assert_eq!(user.provider_user_id, "108296");
        assert_eq!(user.avatar_url, "https://lh3.googleusercontent.com/a/108296");
    }

    #[test]
    fn test_normalize_missing_id_fails() {
        let config = resolve("github").unwrap();
        let raw = json!({"email": "a@x.com"});

        let result = normalize_profile(config, &raw);
        match result {
            Err(OAuth2Error::Normalization(msg)) => assert!(msg.contains("'id'")),
            other => panic!("Expected Normalization error, got {other:?}"),
        }
    }

    #[test]
    fn test_normalize_missing_email_fails() {
        let config = resolve("github").unwrap();
        let raw = json!({"id": 42, "name": "A"});

        let result = normalize_profile(config, &raw);
        assert!(matches!(result, Err(OAuth2Error::Normalization(_))));
    }

    #[test]
    fn test_normalize_null_email_fails() {
        // GitHub serves "email": null when the address is private
        let config = resolve("github").unwrap();
        let raw = json!({"id": 42, "email": null, "name": "A"});

        let result = normalize_profile(config, &raw);
        assert!(matches!(result, Err(OAuth2Error::Normalization(_))));
    }

    #[test]
    fn test_normalize_optional_fields_default_empty() {
        let config = resolve("github").unwrap();
        let raw = json!({"id": 42, "email": "a@x.com"});

        let user = normalize_profile(config, &raw).unwrap();
        assert_eq!(user.display_name, "");
        assert_eq!(user.nickname, "");
        assert_eq!(user.avatar_url, "");
    }
}
