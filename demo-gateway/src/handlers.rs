use axum::Json;
use serde_json::{Value, json};

use federated_login_axum::{AUTH_ROUTE_PREFIX, AuthUser, provider_names};

pub(crate) async fn index(user: Option<AuthUser>) -> Json<Value> {
    match user {
        Some(user) => Json(json!({
            "message": format!("Hey {}!", user.display_name),
            "logout": "/logout",
        })),
        None => Json(json!({
            "message": "Sign in with one of the supported providers.",
            "providers": provider_names()
                .iter()
                .map(|name| format!("{}/{}", AUTH_ROUTE_PREFIX.as_str(), name))
                .collect::<Vec<_>>(),
        })),
    }
}

pub(crate) async fn protected(user: AuthUser) -> Json<Value> {
    tracing::trace!("Serving protected page for {}", user.id);
    Json(json!({ "user": user.0 }))
}
