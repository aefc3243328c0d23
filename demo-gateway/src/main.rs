use axum::{Router, routing::get};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use federated_login_axum::federated_login_router;

mod handlers;
mod server;

use crate::handlers::{index, protected};
use crate::server::{Ports, spawn_http_server, spawn_https_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Install default CryptoProvider for rustls to prevent:
    // "no process-level CryptoProvider available -- call CryptoProvider::install_default() before this point"
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install default CryptoProvider");

    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Validate provider configuration and connect the stores
    federated_login::init().await?;

    let app = Router::new()
        .route("/demo", get(index))
        .route("/protected", get(protected))
        .merge(federated_login_router());

    let ports = Ports {
        http: env_port("AUTH_HTTP_PORT", 3001),
        https: env_port("AUTH_HTTPS_PORT", 3443),
    };

    let http_server = spawn_http_server(ports.http, app.clone());

    // Session cookies are Secure; serve HTTPS whenever a certificate is
    // configured and keep plain HTTP for reverse-proxied deployments.
    match spawn_https_server(ports.https, app).await {
        Some(https_server) => {
            tokio::try_join!(http_server, https_server)?;
        }
        None => {
            http_server.await?;
        }
    }
    Ok(())
}

fn env_port(key: &str, default: u16) -> u16 {
    std::env::var(key)
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(default)
}
