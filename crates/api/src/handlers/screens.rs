//! Handlers for the screen registration catalog (administrator only).
//!
//! Registration writes never include the difficulty or weight columns — the
//! data service computes those from the field count. Search and module
//! filtering happen client-side over the fetched catalog, matching the
//! protocol's lack of a containment operator.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use telas_core::error::CoreError;
use telas_core::naming::{contains_ci, table_name_key};
use telas_core::types::DbId;
use telas_core::validation::require_non_blank;
use telas_data::models::{CatalogScreen, Modulo, RegisterScreen};
use telas_data::repositories::TaskRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /screens`.
#[derive(Debug, Deserialize, Default)]
pub struct CatalogQuery {
    /// Case-insensitive containment over name, kind and module.
    pub q: Option<String>,
    /// Exact module filter.
    pub modulo: Option<Modulo>,
}

/// Response body for `GET /screens`.
#[derive(Debug, Serialize)]
pub struct CatalogView {
    /// Catalog size before filtering.
    pub total: usize,
    pub screens: Vec<CatalogScreen>,
}

/// GET /api/v1/screens
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(query): Query<CatalogQuery>,
) -> AppResult<Json<DataResponse<CatalogView>>> {
    let all = TaskRepo::list_catalog(&state.data).await?;
    let total = all.len();

    let screens = all
        .into_iter()
        .filter(|row| {
            query.modulo.map_or(true, |m| row.modulo == m)
                && query.q.as_deref().map_or(true, |q| matches_search(row, q))
        })
        .collect();

    Ok(Json(DataResponse {
        data: CatalogView { total, screens },
    }))
}

/// POST /api/v1/screens
pub async fn register(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<RegisterScreen>,
) -> AppResult<(StatusCode, Json<DataResponse<CatalogScreen>>)> {
    let name = validate_input(&input)?;

    let created = TaskRepo::register(&state.data, &input, &name, admin.id)
        .await?
        .ok_or_else(|| {
            AppError::InternalError("data service returned no representation for insert".into())
        })?;

    tracing::info!(screen = %created.nome_tabela, "screen registered");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// PUT /api/v1/screens/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<RegisterScreen>,
) -> AppResult<Json<DataResponse<CatalogScreen>>> {
    let name = validate_input(&input)?;

    let updated = TaskRepo::update_screen(&state.data, id, &input, &name, admin.id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "screen",
            id: id.to_string(),
        })?;

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/screens/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    TaskRepo::delete(&state.data, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Run the DTO constraints plus name normalization; returns the normalized
/// table name. Nothing touches the network when this fails.
fn validate_input(input: &RegisterScreen) -> Result<String, AppError> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let name = table_name_key(&input.nome_tabela);
    require_non_blank(&name, "nome_tabela")?;
    Ok(name)
}

fn matches_search(row: &CatalogScreen, q: &str) -> bool {
    let q = q.trim();
    if q.is_empty() {
        return true;
    }
    let kind = serde_json::to_value(row.tipo_tabela)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default();
    let modulo = serde_json::to_value(row.modulo)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default();

    contains_ci(&row.nome_tabela, q) || contains_ci(&kind, q) || contains_ci(&modulo, q)
}
