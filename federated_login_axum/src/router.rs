//! Combined router for all gateway endpoints

use axum::Router;
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Create the router for the whole authentication surface:
///
/// - `GET /`: supported provider names
/// - `GET {AUTH_ROUTE_PREFIX}/{provider}`: begin
/// - `GET|POST {AUTH_ROUTE_PREFIX}/{provider}/callback`: complete
/// - `GET /logout`
/// - `GET /user/info`
pub fn federated_login_router() -> Router {
    federated_login_router_no_trace().layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same surface without the HTTP tracing middleware, for applications
/// that bring their own.
pub fn federated_login_router_no_trace() -> Router {
    Router::new()
        .merge(super::oauth2::router())
        .merge(super::user::router())
}
