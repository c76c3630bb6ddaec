//! Handlers for the pending board: browsing claimable tasks and claiming one.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use telas_core::error::CoreError;
use telas_core::types::DbId;
use telas_core::validation::require_non_blank;
use telas_data::models::{
    DifficultyLevel, PendingFilter, PendingOrder, PendingTask, ScreenTask, TableKind,
};
use telas_data::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::SessionUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query / request types
// ---------------------------------------------------------------------------

/// Sort direction accepted on the query string.
#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderDir {
    #[default]
    Asc,
    Desc,
}

/// Query parameters for `GET /pending`.
#[derive(Debug, Deserialize, Default)]
pub struct PendingQuery {
    pub tipo_tabela: Option<TableKind>,
    pub nivel_api: Option<DifficultyLevel>,
    pub min_campos: Option<i64>,
    pub max_campos: Option<i64>,
    #[serde(default)]
    pub order_by: PendingOrder,
    #[serde(default)]
    pub order_dir: OrderDir,
}

/// Request body for `POST /pending/{id}/claim`.
#[derive(Debug, Deserialize)]
pub struct ClaimRequest {
    /// Screen label to associate with the task; required, non-empty.
    pub tela: String,
}

/// Response body for a successful claim: the claimed row plus the refreshed
/// pending board, so the caller's view reflects current truth immediately.
#[derive(Debug, Serialize)]
pub struct ClaimView {
    pub task: ScreenTask,
    pub pending: Vec<PendingTask>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/pending
pub async fn list(
    State(state): State<AppState>,
    SessionUser(_user): SessionUser,
    Query(query): Query<PendingQuery>,
) -> AppResult<Json<DataResponse<Vec<PendingTask>>>> {
    let filter = to_filter(&query);
    let rows = TaskRepo::list_pending(&state.data, &filter, &state.config.status_vocabulary).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// POST /api/v1/pending/{id}/claim
///
/// The claim protocol: one conditional update that requires the task to
/// still be unassigned. Losing the race is an expected, recoverable
/// condition — it surfaces as a 409 with a human message, never as a crash,
/// and nothing is modified on the loser's side.
pub async fn claim(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    Path(id): Path<DbId>,
    Json(input): Json<ClaimRequest>,
) -> AppResult<Json<DataResponse<ClaimView>>> {
    let tela = require_non_blank(&input.tela, "tela")?;
    let vocab = &state.config.status_vocabulary;

    let claimed =
        TaskRepo::claim(&state.data, id, user.id, &user.nome, tela, vocab, Utc::now()).await?;

    let Some(task) = claimed else {
        return Err(AppError::Core(CoreError::Conflict(
            "task was already claimed by another technician".into(),
        )));
    };

    // Full re-read so the board reflects the claim.
    let pending = TaskRepo::list_pending(&state.data, &PendingFilter::default(), vocab).await?;

    tracing::info!(task = task.id, user = %user.login, "task claimed");
    Ok(Json(DataResponse {
        data: ClaimView { task, pending },
    }))
}

fn to_filter(query: &PendingQuery) -> PendingFilter {
    PendingFilter {
        tipo_tabela: query.tipo_tabela,
        nivel_api: query.nivel_api,
        min_campos: query.min_campos,
        max_campos: query.max_campos,
        order_by: query.order_by,
        descending: matches!(query.order_dir, OrderDir::Desc),
    }
}
