//! federated-login-axum - Axum integration for the federated-login gateway
//!
//! Mounts the authentication state machine as an axum `Router`:
//!
//! - `GET /`: supported provider names
//! - `GET /auth/{provider}`: begin the authorization-code flow
//! - `GET|POST /auth/{provider}/callback`: complete it
//! - `GET /logout`: revoke the session
//! - `GET /user/info`: the authenticated canonical user

mod config;
mod error;
mod oauth2;
mod router;
mod session;
mod user;

pub use config::{AUTH_POST_LOGIN_REDIRECT, AUTH_RESPONSE_MODE};
pub use router::{federated_login_router, federated_login_router_no_trace};
pub use session::AuthUser;

// Re-export the pieces an embedding application typically needs
pub use federated_login::{
    AUTH_ROUTE_PREFIX, CoordinationError, SESSION_COOKIE_NAME, User, init, provider_names,
};
