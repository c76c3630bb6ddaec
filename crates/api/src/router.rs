//! Shared application router builder.
//!
//! Provides [`build_app_router`] so both the production binary (`main.rs`)
//! and integration tests use the exact same middleware stack.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                 sign in against the usuario table (public)
/// /auth/logout                clear the cached session
/// /auth/me                    cached identity
///
/// /dashboard                  role-shaped aggregation
///
/// /tasks/mine                 the technician's assigned tasks
/// /tasks/{id}/start           open the first time entry
/// /tasks/{id}/pause           close the open time entry
/// /tasks/{id}/resume          open a new time entry after a pause
/// /tasks/{id}/finalize        set the actual-finish timestamp
/// /tasks/{id}/status          set one sub-status field (PUT)
/// /tasks/{id}/notes           replace the free-text notes (PUT)
///
/// /pending                    claimable tasks with filters
/// /pending/{id}/claim         conditional-update claim
///
/// /completed                  finished tasks + average hours per screen
///
/// /screens                    catalog: list (GET), register (POST) — admin
/// /screens/{id}               update (PUT), delete (DELETE) — admin
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
        .route("/dashboard", get(handlers::dashboard::dashboard))
        .route("/tasks/mine", get(handlers::tasks::my_tasks))
        .route("/tasks/{id}/start", post(handlers::tasks::start))
        .route("/tasks/{id}/pause", post(handlers::tasks::pause))
        .route("/tasks/{id}/resume", post(handlers::tasks::resume))
        .route("/tasks/{id}/finalize", post(handlers::tasks::finalize))
        .route("/tasks/{id}/status", put(handlers::tasks::set_status))
        .route("/tasks/{id}/notes", put(handlers::tasks::set_notes))
        .route("/pending", get(handlers::pending::list))
        .route("/pending/{id}/claim", post(handlers::pending::claim))
        .route("/completed", get(handlers::completed::list))
        .route(
            "/screens",
            get(handlers::screens::list).post(handlers::screens::register),
        )
        .route(
            "/screens/{id}",
            put(handlers::screens::update).delete(handlers::screens::delete),
        )
}

/// Build the full application [`Router`] with all middleware layers.
///
/// The middleware stack is applied bottom-up:
///
/// 1. CORS
/// 2. Set request ID on incoming requests
/// 3. Structured request/response tracing
/// 4. Propagate request ID to response
/// 5. Request timeout
/// 6. Panic recovery (catch panics, return 500)
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let cors = build_cors_layer(config);
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        // Health check at root level (not under /api/v1).
        .merge(handlers::health::router())
        // API v1 routes.
        .nest("/api/v1", api_routes())
        // -- Middleware stack (applied bottom-up) --
        // Panic recovery: catch panics and return 500 JSON.
        .layer(CatchPanicLayer::new())
        // Request timeout.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        // Propagate request ID to response.
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        // Structured request/response tracing.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Set request ID on incoming requests.
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        // CORS.
        .layer(cors)
        // Shared state.
        .with_state(state)
}

/// Build the CORS middleware layer from server configuration.
///
/// Panics at startup if any configured origin is invalid — misconfiguration
/// should fail fast.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
