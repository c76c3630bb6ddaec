//! Handlers for a technician's own tasks: listing, timer transitions,
//! sub-status edits, and notes.
//!
//! This is the lifecycle controller's HTTP surface. Each mutation re-derives
//! the guard facts from the latest fetched state, refuses illegal calls
//! before touching the network, invokes the matching stored procedure, and
//! answers with a full re-read of the technician's list.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use telas_core::error::CoreError;
use telas_core::lifecycle::{
    validate_action, validate_substatus_change, WorkAction, WorkItemState,
};
use telas_core::status::StatusField;
use telas_core::summary::{summarize_assigned, StatusSnapshot, TaskCounts};
use telas_core::types::DbId;
use telas_data::models::{ScreenTask, UserAccount};
use telas_data::repositories::{TaskRepo, TimeEntryRepo, WorkRpc};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::SessionUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// One task with its derived presentation flags.
#[derive(Debug, Serialize)]
pub struct TaskView {
    #[serde(flatten)]
    pub task: ScreenTask,
    /// An open time entry exists — the task is actually running.
    pub em_andamento: bool,
    /// The actual-finish timestamp is set.
    pub finalizada: bool,
}

/// Response body for `GET /tasks/mine` and for every mutation on a task.
#[derive(Debug, Serialize)]
pub struct MyTasksView {
    pub counts: TaskCounts,
    pub tarefas: Vec<TaskView>,
}

/// Request body for `PUT /tasks/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    /// Which of the three sub-status columns to set.
    pub campo: StatusField,
    /// One of the vocabulary spellings.
    pub status: String,
}

/// Request body for `PUT /tasks/{id}/notes`.
#[derive(Debug, Deserialize)]
pub struct SetNotesRequest {
    pub observacoes: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/tasks/mine
pub async fn my_tasks(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
) -> AppResult<Json<DataResponse<MyTasksView>>> {
    let view = load_my_view(&state, &user).await?;
    Ok(Json(DataResponse { data: view }))
}

/// POST /api/v1/tasks/{id}/start
pub async fn start(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MyTasksView>>> {
    perform_action(state, user, id, WorkAction::Start).await
}

/// POST /api/v1/tasks/{id}/pause
pub async fn pause(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MyTasksView>>> {
    perform_action(state, user, id, WorkAction::Pause).await
}

/// POST /api/v1/tasks/{id}/resume
pub async fn resume(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MyTasksView>>> {
    perform_action(state, user, id, WorkAction::Resume).await
}

/// POST /api/v1/tasks/{id}/finalize
pub async fn finalize(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MyTasksView>>> {
    perform_action(state, user, id, WorkAction::Finalize).await
}

/// PUT /api/v1/tasks/{id}/status
///
/// The only mutation that can flip finalize-eligibility.
pub async fn set_status(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    Path(id): Path<DbId>,
    Json(input): Json<SetStatusRequest>,
) -> AppResult<Json<DataResponse<MyTasksView>>> {
    let vocab = &state.config.status_vocabulary;
    if !vocab.is_known(&input.status) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "unknown status value: {}",
            input.status
        ))));
    }

    let (_, item_state) = load_owned_task(&state, &user, id).await?;
    validate_substatus_change(item_state)?;

    WorkRpc::atualizar_status(&state.data, id, input.campo, &input.status).await?;

    let view = load_my_view(&state, &user).await?;
    Ok(Json(DataResponse { data: view }))
}

/// PUT /api/v1/tasks/{id}/notes
///
/// Free-text notes, saved as-is. Refused once the task is finalized.
pub async fn set_notes(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    Path(id): Path<DbId>,
    Json(input): Json<SetNotesRequest>,
) -> AppResult<Json<DataResponse<MyTasksView>>> {
    let (_, item_state) = load_owned_task(&state, &user, id).await?;
    validate_substatus_change(item_state)?;

    let notes = input
        .observacoes
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    TaskRepo::set_notes(&state.data, id, notes).await?;

    let view = load_my_view(&state, &user).await?;
    Ok(Json(DataResponse { data: view }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Run one timer/finalize transition: guard first, then the matching stored
/// procedure, then a full re-read.
async fn perform_action(
    state: AppState,
    user: UserAccount,
    id: DbId,
    action: WorkAction,
) -> AppResult<Json<DataResponse<MyTasksView>>> {
    let (_, item_state) = load_owned_task(&state, &user, id).await?;

    // Guard refusals return before any network call.
    validate_action(action, item_state)?;

    match action {
        WorkAction::Start => WorkRpc::iniciar(&state.data, id, user.id, &user.nome).await?,
        WorkAction::Pause => WorkRpc::pausar(&state.data, id, user.id).await?,
        WorkAction::Resume => WorkRpc::retomar(&state.data, id, user.id, &user.nome).await?,
        WorkAction::Finalize => WorkRpc::finalizar(&state.data, id, user.id).await?,
    }

    let view = load_my_view(&state, &user).await?;
    Ok(Json(DataResponse { data: view }))
}

/// Fetch one task, check ownership, and derive the guard-relevant state from
/// the latest read.
async fn load_owned_task(
    state: &AppState,
    user: &UserAccount,
    id: DbId,
) -> AppResult<(ScreenTask, WorkItemState)> {
    let task = TaskRepo::find_by_id(&state.data, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "task",
            id: id.to_string(),
        })?;

    if task.tecnico_id != Some(user.id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "task is assigned to another technician".into(),
        )));
    }

    let open_ids = TimeEntryRepo::open_item_ids(&state.data, Some(user.id)).await?;
    let vocab = &state.config.status_vocabulary;

    let item_state = WorkItemState {
        open_entry: open_ids.contains(&task.id),
        finalized: task.data_fim_real.is_some(),
        substatuses_terminal: vocab.is_terminal(&task.status_api)
            && vocab.is_terminal(&task.status_teste)
            && vocab.is_terminal(&task.status_documentacao),
    };

    Ok((task, item_state))
}

/// Fresh read of the technician's list with derived flags and counts.
async fn load_my_view(state: &AppState, user: &UserAccount) -> AppResult<MyTasksView> {
    let tasks = TaskRepo::list_assigned(&state.data, user.id).await?;
    let open_ids = TimeEntryRepo::open_item_ids(&state.data, Some(user.id)).await?;
    let vocab = &state.config.status_vocabulary;

    let items: Vec<StatusSnapshot> = tasks
        .iter()
        .map(|t| StatusSnapshot {
            id: t.id,
            tecnico_nome: t.tecnico_nome.clone(),
            status_api: t.status_api.clone(),
            status_teste: t.status_teste.clone(),
            status_documentacao: t.status_documentacao.clone(),
        })
        .collect();
    let counts = summarize_assigned(&items, &open_ids, vocab);

    let tarefas = tasks
        .into_iter()
        .map(|task| TaskView {
            em_andamento: open_ids.contains(&task.id),
            finalizada: task.data_fim_real.is_some(),
            task,
        })
        .collect();

    Ok(MyTasksView { counts, tarefas })
}
