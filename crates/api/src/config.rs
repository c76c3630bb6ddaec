use std::path::PathBuf;

use telas_core::status::StatusVocabulary;
use telas_data::client::DataServiceConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the data-service credentials have defaults suitable for
/// local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Path of the cached-session file (default: `telas_session.json`).
    pub session_cache_path: PathBuf,
    /// Connection settings for the external data service.
    pub data_service: DataServiceConfig,
    /// Status spellings of the live external schema.
    pub status_vocabulary: StatusVocabulary,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default               |
    /// |------------------------|-----------------------|
    /// | `HOST`                 | `0.0.0.0`             |
    /// | `PORT`                 | `3000`                |
    /// | `CORS_ORIGINS`         | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                  |
    /// | `SESSION_CACHE_PATH`   | `telas_session.json`  |
    /// | `DATA_SERVICE_URL`     | (required)            |
    /// | `DATA_SERVICE_KEY`     | (required)            |
    /// | `STATUS_PENDING` / `STATUS_WORKING` / `STATUS_TERMINAL` | `Pendente` / `Trabalhando` / `Finalizado` |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let session_cache_path = std::env::var("SESSION_CACHE_PATH")
            .unwrap_or_else(|_| "telas_session.json".into())
            .into();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            session_cache_path,
            data_service: DataServiceConfig::from_env(),
            status_vocabulary: StatusVocabulary::from_env(),
        }
    }
}
