//! Axum-based mock identity provider
//!
//! One server on a fixed port serves the token and user-info endpoints
//! for the whole integration run; the flow under test is pointed at it
//! via the per-provider endpoint override environment variables.

use axum::{
    Json, Router,
    extract::Form,
    http::StatusCode,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::{
    collections::HashMap,
    sync::{LazyLock, Mutex},
    thread,
    time::Duration,
};

/// Fixed port for the mock provider
pub const MOCK_PROVIDER_PORT: u16 = 9876;

/// The profile the user-info endpoint currently serves. Tests mutate it
/// to simulate profile changes between logins; they run serially.
static PROFILE: LazyLock<Mutex<Value>> = LazyLock::new(|| Mutex::new(default_profile()));

pub fn default_profile() -> Value {
    json!({
        "id": 4242,
        "email": "integration@x.com",
        "name": "Integration User",
        "login": "integration",
        "avatar_url": "https://avatars.example.com/u/4242"
    })
}

pub fn set_profile(profile: Value) {
    *PROFILE.lock().unwrap() = profile;
}

/// Start the provider once and hand back its base URL. Subsequent calls
/// return immediately.
pub fn ensure_mock_provider() -> String {
    static SERVER: LazyLock<String> = LazyLock::new(|| {
        thread::spawn(|| {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(async {
                let app = Router::new()
                    .route("/token", post(token_endpoint))
                    .route("/userinfo", get(userinfo_endpoint));

                let listener =
                    tokio::net::TcpListener::bind(("127.0.0.1", MOCK_PROVIDER_PORT))
                        .await
                        .expect("Failed to bind mock provider port");
                axum::serve(listener, app).await.expect("Mock provider died");
            });
        });

        // Wait until the listener accepts connections
        for _ in 0..50 {
            if std::net::TcpStream::connect(("127.0.0.1", MOCK_PROVIDER_PORT)).is_ok() {
                return format!("http://127.0.0.1:{MOCK_PROVIDER_PORT}");
            }
            thread::sleep(Duration::from_millis(100));
        }
        panic!("Mock provider did not become ready");
    });

    SERVER.clone()
}

/// Token endpoint: any code exchanges into a fixed bearer token, except
/// the sentinel "bad-code" which answers like a consumed or forged code.
async fn token_endpoint(
    Form(form): Form<HashMap<String, String>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match form.get("code").map(String::as_str) {
        Some("bad-code") | None => Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "bad_verification_code" })),
        )),
        Some(_) => Ok(Json(json!({
            "access_token": "mock_access_token",
            "token_type": "bearer",
            "scope": "read:user,user:email"
        }))),
    }
}

async fn userinfo_endpoint() -> Json<Value> {
    Json(PROFILE.lock().unwrap().clone())
}
