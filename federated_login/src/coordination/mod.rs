mod errors;
mod flow;

pub use errors::CoordinationError;
pub use flow::{authorize_callback_core, begin_login_core, logout_core, whoami_core};
