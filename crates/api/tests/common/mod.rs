//! Shared helpers for HTTP-level integration tests.
//!
//! Tests run the real application router (full middleware stack) via
//! `tower::ServiceExt::oneshot`, pointed at an in-process axum stand-in for
//! the external data service bound to an ephemeral port.

// Not every test file uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use telas_api::config::ServerConfig;
use telas_api::router::build_app_router;
use telas_api::session::SessionStore;
use telas_api::state::AppState;
use telas_core::role::Role;
use telas_core::status::StatusVocabulary;
use telas_data::client::{DataServiceClient, DataServiceConfig};
use telas_data::models::UserAccount;

/// A test instance of the application plus handles the tests poke directly.
pub struct TestApp {
    pub router: Router,
    pub sessions: Arc<SessionStore>,
    // Keeps the session cache directory alive for the test's duration.
    _session_dir: tempfile::TempDir,
}

/// Serve a mock data service on an ephemeral port; returns its base URL.
pub async fn spawn_mock(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock listener");
    let addr = listener.local_addr().expect("mock local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock serve");
    });
    format!("http://{addr}")
}

/// Build the application with the full middleware stack, pointed at the
/// given mock data-service URL, with a fresh session cache.
pub fn build_test_app(data_service_url: String) -> TestApp {
    let session_dir = tempfile::TempDir::new().expect("session tempdir");
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        session_cache_path: session_dir.path().join("session.json"),
        data_service: DataServiceConfig {
            base_url: data_service_url,
            api_key: "test-service-key".into(),
        },
        status_vocabulary: StatusVocabulary::default(),
    };

    let sessions = Arc::new(SessionStore::load(config.session_cache_path.clone()));
    let state = AppState {
        data: Arc::new(DataServiceClient::new(config.data_service.clone())),
        config: Arc::new(config.clone()),
        sessions: Arc::clone(&sessions),
    };

    TestApp {
        router: build_app_router(state, &config),
        sessions,
        _session_dir: session_dir,
    }
}

/// A technician account with a fixed id.
pub fn technician() -> UserAccount {
    UserAccount {
        id: uuid::Uuid::parse_str("7f3b0a52-0000-0000-0000-000000000001").unwrap(),
        nome: "Ana Souza".into(),
        login: "ana".into(),
        perfil: Role::Tecnico,
        ativo: true,
        meta_semanal: Some(5),
    }
}

/// An administrator account with a fixed id.
pub fn admin() -> UserAccount {
    UserAccount {
        id: uuid::Uuid::parse_str("7f3b0a52-0000-0000-0000-00000000000a").unwrap(),
        nome: "Carlos Lima".into(),
        login: "carlos".into(),
        perfil: Role::Administrador,
        ativo: true,
        meta_semanal: Some(5),
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "POST", uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "PUT", uri, body).await
}

async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
