use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use telas_api::config::ServerConfig;
use telas_api::router::build_app_router;
use telas_api::session::SessionStore;
use telas_api::state::AppState;
use telas_data::client::DataServiceClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "telas_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Data service client ---
    let data = Arc::new(DataServiceClient::new(config.data_service.clone()));

    // --- Session store (load-from-cache lifecycle) ---
    let sessions = Arc::new(SessionStore::load(config.session_cache_path.clone()));
    match sessions.current() {
        Some(user) => tracing::info!(user = %user.login, "resumed cached session"),
        None => tracing::info!("no cached session"),
    }

    // --- App state ---
    let state = AppState {
        data,
        config: Arc::new(config.clone()),
        sessions,
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Serve ---
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("HOST/PORT must form a valid socket address");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    tracing::info!(%addr, "telas-api listening");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
