mod config;
mod core;
mod errors;
mod types;

pub use config::{SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME};
pub use errors::SessionError;

pub(crate) use core::{
    create_new_session_with_uid, get_session_id_from_headers, get_user_id_from_session,
    prepare_logout_response,
};
