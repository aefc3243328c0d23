//! Database table configuration

use std::env;
use std::sync::LazyLock;

/// Table prefix from environment variable
pub(crate) static DB_TABLE_PREFIX: LazyLock<String> =
    LazyLock::new(|| env::var("DB_TABLE_PREFIX").unwrap_or_else(|_| "fl_".to_string()));

/// Users table name
pub(crate) static DB_TABLE_USERS: LazyLock<String> = LazyLock::new(|| {
    env::var("DB_TABLE_USERS").unwrap_or_else(|_| format!("{}{}", *DB_TABLE_PREFIX, "users"))
});

#[cfg(test)]
mod tests {
    use std::env;

    #[test]
    fn test_db_table_prefix_default() {
        let prefix = env::var("DB_TABLE_PREFIX_UNSET").unwrap_or_else(|_| "fl_".to_string());
        assert_eq!(prefix, "fl_");
    }

    #[test]
    fn test_users_table_name_shape() {
        let prefix = "fl_".to_string();
        assert_eq!(format!("{}{}", prefix, "users"), "fl_users");
    }
}
