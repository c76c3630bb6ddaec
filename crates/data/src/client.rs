//! HTTP client for the external tabular data service.
//!
//! The service speaks a generic REST-over-HTTP query protocol: reads are
//! `GET` with filter predicates in the query string, writes are `POST` /
//! `PATCH` / `DELETE`, and stored procedures are `POST /rest/v1/rpc/<name>`.
//! A static service key authenticates every request, sent both as an
//! `apikey` header and as a bearer token.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::filter::Filter;

/// Environment variable holding the service base URL.
pub const ENV_DATA_SERVICE_URL: &str = "DATA_SERVICE_URL";
/// Environment variable holding the static service key.
pub const ENV_DATA_SERVICE_KEY: &str = "DATA_SERVICE_KEY";

/// Write responses carry the affected rows when this header is set. Claims
/// depend on it: an empty representation is the race-lost signal.
const PREFER_REPRESENTATION: (&str, &str) = ("Prefer", "return=representation");

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from the data-service boundary.
#[derive(Debug, thiserror::Error)]
pub enum DataServiceError {
    /// The HTTP request itself failed (network, DNS, TLS, decode).
    #[error("data service request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    ///
    /// `message` is extracted from the JSON error body when present, else
    /// the raw body text, else `"HTTP <status>"` — and is surfaced to the
    /// user verbatim.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Human-readable message per the extraction order above.
        message: String,
    },
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Deployment configuration for the data service connection.
#[derive(Debug, Clone)]
pub struct DataServiceConfig {
    /// Base URL, e.g. `https://xyz.supabase.co`.
    pub base_url: String,
    /// Static service key attached to every request.
    pub api_key: String,
}

impl DataServiceConfig {
    /// Load from `DATA_SERVICE_URL` / `DATA_SERVICE_KEY`.
    ///
    /// Panics when either is missing — the service is unusable without them,
    /// and misconfiguration should fail at startup.
    pub fn from_env() -> Self {
        let base_url = std::env::var(ENV_DATA_SERVICE_URL)
            .unwrap_or_else(|_| panic!("{ENV_DATA_SERVICE_URL} must be set"));
        let api_key = std::env::var(ENV_DATA_SERVICE_KEY)
            .unwrap_or_else(|_| panic!("{ENV_DATA_SERVICE_KEY} must be set"));
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Authenticated client for the tabular data service.
///
/// Cheap to clone is not needed — the api layer holds it behind an `Arc`.
pub struct DataServiceClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DataServiceClient {
    /// Create a client with a fresh connection pool.
    pub fn new(config: DataServiceConfig) -> Self {
        Self::with_http(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_http(http: reqwest::Client, config: DataServiceConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        }
    }

    /// Read rows from `table` matching `filter`.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        filter: &Filter,
    ) -> Result<Vec<T>, DataServiceError> {
        let request = self
            .authed(self.http.get(self.table_url(table)))
            .query(filter.as_query());
        let response = request.send().await?;
        Self::parse_rows(response).await
    }

    /// Insert one row into `table`, returning the created representation
    /// (including server-computed columns).
    pub async fn insert_returning<T: DeserializeOwned>(
        &self,
        table: &str,
        body: &impl Serialize,
    ) -> Result<Vec<T>, DataServiceError> {
        let request = self
            .authed(self.http.post(self.table_url(table)))
            .header(PREFER_REPRESENTATION.0, PREFER_REPRESENTATION.1)
            .json(body);
        let response = request.send().await?;
        Self::parse_rows(response).await
    }

    /// Conditionally update rows of `table`: `filter` is the WHERE clause,
    /// `body` the SET list. Returns the rows actually modified — an empty
    /// vector means the condition matched nothing.
    pub async fn update_where<T: DeserializeOwned>(
        &self,
        table: &str,
        filter: &Filter,
        body: &impl Serialize,
    ) -> Result<Vec<T>, DataServiceError> {
        let request = self
            .authed(self.http.patch(self.table_url(table)))
            .query(filter.as_query())
            .header(PREFER_REPRESENTATION.0, PREFER_REPRESENTATION.1)
            .json(body);
        let response = request.send().await?;
        Self::parse_rows(response).await
    }

    /// Delete rows of `table` matching `filter`.
    pub async fn delete_where(&self, table: &str, filter: &Filter) -> Result<(), DataServiceError> {
        let request = self
            .authed(self.http.delete(self.table_url(table)))
            .query(filter.as_query());
        let response = request.send().await?;
        Self::check_status(response).await
    }

    /// Call a stored procedure with named parameters, expecting a JSON
    /// result.
    pub async fn rpc<T: DeserializeOwned>(
        &self,
        function: &str,
        params: &impl Serialize,
    ) -> Result<T, DataServiceError> {
        let request = self.authed(self.http.post(self.rpc_url(function))).json(params);
        let response = request.send().await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Call a stored procedure for its side effect, discarding the body.
    pub async fn rpc_unit(
        &self,
        function: &str,
        params: &impl Serialize,
    ) -> Result<(), DataServiceError> {
        let request = self.authed(self.http.post(self.rpc_url(function))).json(params);
        let response = request.send().await?;
        Self::check_status(response).await
    }

    // ---- private helpers ----

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    fn rpc_url(&self, function: &str) -> String {
        format!("{}/rest/v1/rpc/{function}", self.base_url)
    }

    /// Attach the static service credential as both header and bearer token.
    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Ensure a success status, otherwise extract the error message from the
    /// body per the service's error contract.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, DataServiceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(status.as_u16(), &body);
        tracing::warn!(status = status.as_u16(), %message, "data service error");
        Err(DataServiceError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Parse a successful response body as a JSON row array. An empty body
    /// (writes without representation) parses as no rows.
    async fn parse_rows<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Vec<T>, DataServiceError> {
        let response = Self::ensure_success(response).await?;
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&text).map_err(|e| DataServiceError::Api {
            status: 200,
            message: format!("unexpected data service payload: {e}"),
        })
    }

    async fn check_status(response: reqwest::Response) -> Result<(), DataServiceError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

/// Extract a user-facing message from an error body.
///
/// Order: JSON `message` / `error` / `error_description` field, then the raw
/// body text, then `"HTTP <status>"`.
fn extract_error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error", "error_description"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
    }
    if !body.trim().is_empty() {
        return body.trim().to_string();
    }
    format!("HTTP {status}")
}
