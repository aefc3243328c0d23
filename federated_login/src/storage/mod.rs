mod cache_store;
mod config;
mod data_store;
mod errors;
mod types;

pub(crate) async fn init() -> Result<(), errors::StorageError> {
    let _ = *cache_store::GENERIC_CACHE_STORE;
    let _ = *data_store::GENERIC_DATA_STORE;

    Ok(())
}

pub(crate) use cache_store::GENERIC_CACHE_STORE;
pub(crate) use config::DB_TABLE_USERS;
pub(crate) use data_store::GENERIC_DATA_STORE;
pub(crate) use types::CacheData;
