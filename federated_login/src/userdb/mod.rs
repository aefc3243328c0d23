mod errors;
mod storage;
mod types;

pub use errors::UserError;
pub use types::User;

pub(crate) use storage::UserStore;

pub(crate) async fn init() -> Result<(), UserError> {
    crate::storage::init()
        .await
        .map_err(|e| UserError::Storage(e.to_string()))?;
    UserStore::init().await
}
