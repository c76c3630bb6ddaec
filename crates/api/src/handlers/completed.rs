//! Handler for the completed-work summary.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use telas_data::models::CompletedTask;
use telas_data::repositories::{ProductivityRepo, TaskRepo};

use crate::error::AppResult;
use crate::middleware::auth::SessionUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for `GET /completed`.
#[derive(Debug, Serialize)]
pub struct CompletedView {
    pub total: usize,
    /// Average hours spent per finished screen, from the service's rollup
    /// view. Absent until at least one screen finished.
    pub media_horas_por_tela: Option<f64>,
    pub tarefas: Vec<CompletedTask>,
}

/// GET /api/v1/completed
pub async fn list(
    State(state): State<AppState>,
    SessionUser(_user): SessionUser,
) -> AppResult<Json<DataResponse<CompletedView>>> {
    let tarefas = TaskRepo::list_completed(&state.data, &state.config.status_vocabulary).await?;
    let media_horas_por_tela = ProductivityRepo::average_hours_per_screen(&state.data).await?;

    Ok(Json(DataResponse {
        data: CompletedView {
            total: tarefas.len(),
            media_horas_por_tela,
            tarefas,
        },
    }))
}
