//! Handlers for the `/auth` resource (login, logout, current identity).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use telas_core::error::CoreError;
use telas_core::validation::require_non_blank;
use telas_data::models::UserAccount;
use telas_data::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::SessionUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub senha: String,
}

/// POST /api/v1/auth/login
///
/// Matches the credentials against the `usuario` table (plaintext, trusted
/// as-is) and caches the returned identity. Wrong credentials and an
/// inactive account are deliberately indistinguishable.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<UserAccount>>> {
    let login = require_non_blank(&input.login, "login")?;
    let senha = require_non_blank(&input.senha, "senha")?;

    let user = UserRepo::find_active_by_credentials(&state.data, login, senha)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid login or password (or inactive account)".into(),
            ))
        })?;

    state
        .sessions
        .sign_in(user.clone())
        .map_err(|e| AppError::InternalError(format!("could not persist session cache: {e}")))?;

    tracing::info!(user = %user.login, "signed in");
    Ok(Json(DataResponse { data: user }))
}

/// POST /api/v1/auth/logout
///
/// Clears the session and its cache file. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>) -> StatusCode {
    state.sessions.sign_out();
    StatusCode::NO_CONTENT
}

/// GET /api/v1/auth/me
///
/// The cached identity, for the shell to decide which surface to show.
pub async fn me(SessionUser(user): SessionUser) -> Json<DataResponse<UserAccount>> {
    Json(DataResponse { data: user })
}
