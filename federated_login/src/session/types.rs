use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::errors::SessionError;
use crate::storage::CacheData;

/// Server-side session record, stored under the `session` cache prefix
/// and keyed by the unguessable session id carried in the cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct StoredSession {
    pub(crate) user_id: String,
    pub(crate) expires_at: DateTime<Utc>,
    pub(crate) ttl: u64,
}

impl From<StoredSession> for CacheData {
    fn from(data: StoredSession) -> Self {
        Self {
            value: serde_json::to_string(&data).expect("Failed to serialize StoredSession"),
        }
    }
}

impl TryFrom<CacheData> for StoredSession {
    type Error = SessionError;

    fn try_from(data: CacheData) -> Result<Self, Self::Error> {
        serde_json::from_str(&data.value).map_err(|e| SessionError::Storage(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_stored_session_cache_roundtrip() {
        let session = StoredSession {
            user_id: "github:42".to_string(),
            expires_at: Utc::now() + Duration::seconds(3600),
            ttl: 3600,
        };

        let data: CacheData = session.clone().into();
        let back: StoredSession = data.try_into().unwrap();

        assert_eq!(back.user_id, session.user_id);
        assert_eq!(back.expires_at, session.expires_at);
        assert_eq!(back.ttl, session.ttl);
    }

    #[test]
    fn test_malformed_cache_data_is_storage_error() {
        let data = CacheData {
            value: "not json".to_string(),
        };
        let result: Result<StoredSession, _> = data.try_into();

        assert!(matches!(result, Err(SessionError::Storage(_))));
    }
}
