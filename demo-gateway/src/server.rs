use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use std::{env, net::SocketAddr};
use tokio::task::JoinHandle;

#[derive(Clone, Copy)]
pub(crate) struct Ports {
    pub(crate) http: u16,
    pub(crate) https: u16,
}

pub(crate) fn spawn_http_server(port: u16, app: Router) -> JoinHandle<()> {
    tokio::spawn(async move {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        tracing::info!("HTTP server listening on {}", addr);
        axum_server::bind(addr)
            .serve(app.into_make_service())
            .await
            .unwrap();
    })
}

/// Spawn the HTTPS listener when AUTH_TLS_CERT/AUTH_TLS_KEY point at a
/// PEM pair; otherwise the demo serves plain HTTP only.
pub(crate) async fn spawn_https_server(port: u16, app: Router) -> Option<JoinHandle<()>> {
    let (Ok(cert), Ok(key)) = (env::var("AUTH_TLS_CERT"), env::var("AUTH_TLS_KEY")) else {
        tracing::info!("AUTH_TLS_CERT/AUTH_TLS_KEY not set, skipping HTTPS listener");
        return None;
    };

    let config = RustlsConfig::from_pem_file(cert, key)
        .await
        .expect("Failed to load TLS certificate");

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("HTTPS server listening on {}", addr);
    Some(tokio::spawn(async move {
        axum_server::bind_rustls(addr, config)
            .serve(app.into_make_service())
            .await
            .unwrap();
    }))
}
