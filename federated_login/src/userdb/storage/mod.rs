mod postgres;
mod sqlite;

use crate::storage::GENERIC_DATA_STORE;
use crate::userdb::{errors::UserError, types::User};

use postgres::*;
use sqlite::*;

pub(crate) struct UserStore;

impl UserStore {
    /// Initialize the user database tables
    pub(crate) async fn init() -> Result<(), UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        match (store.as_sqlite(), store.as_postgres()) {
            (Some(pool), _) => create_tables_sqlite(pool).await,
            (_, Some(pool)) => create_tables_postgres(pool).await,
            _ => Err(UserError::Storage("Unsupported database type".to_string())),
        }
    }

    /// Get a user by their provider-qualified ID
    pub(crate) async fn get_user(id: &str) -> Result<Option<User>, UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            get_user_sqlite(pool, id).await
        } else if let Some(pool) = store.as_postgres() {
            get_user_postgres(pool, id).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Insert the user, or overwrite all mutable fields of the row with
    /// the same provider-qualified id. Atomicity with respect to
    /// concurrent upserts for the same key is delegated to the
    /// database's native upsert.
    pub(crate) async fn upsert_user(user: User) -> Result<User, UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            upsert_user_sqlite(pool, user).await
        } else if let Some(pool) = store.as_postgres() {
            upsert_user_postgres(pool, user).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }
}

/// The upsert statement resolves id conflicts in its ON CONFLICT arm, so
/// a unique violation that still surfaces can only be the email
/// constraint colliding with a different identity.
pub(super) fn map_upsert_error(e: sqlx::Error, email: &str) -> UserError {
    match &e {
        sqlx::Error::Database(dbe)
            if matches!(dbe.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
        {
            UserError::DuplicateEmail(email.to_string())
        }
        _ => UserError::Storage(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::init_test_environment;
    use chrono::Utc;
    use serial_test::serial;

    fn user(provider: &str, uid: &str, email: &str, display_name: &str) -> User {
        User::new(
            provider.to_string(),
            uid.to_string(),
            email.to_string(),
            display_name.to_string(),
            "nick".to_string(),
            "https://example.com/avatar.png".to_string(),
        )
    }

    #[tokio::test]
    #[serial]
    async fn test_upsert_then_get() {
        init_test_environment().await;

        let u = user("github", "upsert-1", "upsert-1@x.com", "First");
        UserStore::upsert_user(u.clone()).await.unwrap();

        let stored = UserStore::get_user(&u.id).await.unwrap().unwrap();
        assert_eq!(stored.id, "github:upsert-1");
        assert_eq!(stored.email, "upsert-1@x.com");
        assert_eq!(stored.display_name, "First");
    }

    #[tokio::test]
    #[serial]
    async fn test_get_unknown_user_is_none() {
        init_test_environment().await;

        let stored = UserStore::get_user("github:no-such-user").await.unwrap();
        assert!(stored.is_none());
    }

    /// Upsert idempotence: two upserts for the same provider identity
    /// leave one row carrying the most recent field values.
    #[tokio::test]
    #[serial]
    async fn test_repeat_upsert_overwrites_mutable_fields() {
        init_test_environment().await;

        let first = user("github", "repeat-1", "repeat-1@x.com", "A");
        let created = UserStore::upsert_user(first.clone()).await.unwrap().created_at;

        let mut second = user("github", "repeat-1", "repeat-1@x.com", "A2");
        second.updated_at = Utc::now();
        UserStore::upsert_user(second).await.unwrap();

        let stored = UserStore::get_user("github:repeat-1").await.unwrap().unwrap();
        assert_eq!(stored.display_name, "A2");
        assert_eq!(stored.provider_user_id, "repeat-1");
        // created_at is set on insert only
        assert_eq!(stored.created_at, created);
    }

    /// Two provider identities asserting the same email is a conflict
    /// the store surfaces; the first identity's row stays unmodified.
    #[tokio::test]
    #[serial]
    async fn test_duplicate_email_across_providers_conflicts() {
        init_test_environment().await;

        let github = user("github", "dup-7", "dup@x.com", "From GitHub");
        UserStore::upsert_user(github.clone()).await.unwrap();

        let google = user("google", "dup-8", "dup@x.com", "From Google");
        let err = UserStore::upsert_user(google).await.unwrap_err();

        match err {
            UserError::DuplicateEmail(email) => assert_eq!(email, "dup@x.com"),
            other => panic!("Expected DuplicateEmail, got {other:?}"),
        }

        let stored = UserStore::get_user("github:dup-7").await.unwrap().unwrap();
        assert_eq!(stored.display_name, "From GitHub");
        assert!(UserStore::get_user("google:dup-8").await.unwrap().is_none());
    }
}
