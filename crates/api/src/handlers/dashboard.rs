//! Handler for the role-shaped dashboard.
//!
//! Technicians see their own tallies; administrators additionally get the
//! per-technician breakdown, both weekly productivity rollups, and the
//! completion-date projection. Everything is recomputed from a fresh read —
//! nothing is cached between requests.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use telas_core::productivity::{weekly_attainment, Attainment, DEFAULT_WEEKLY_TARGET};
use telas_core::projection::{
    project_completion, CompletionProjection, HOURS_PER_DAY, HOURS_PER_SCREEN,
};
use telas_core::role::Role;
use telas_core::summary::{group_by_technician, summarize, StatusSnapshot, TaskCounts};
use telas_core::types::UserId;
use telas_data::repositories::{ProductivityRepo, TaskRepo, TimeEntryRepo};

use crate::error::AppResult;
use crate::middleware::auth::SessionUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// One technician's weekly rollup, banded.
#[derive(Debug, Serialize)]
pub struct TechnicianAttainment {
    pub tecnico_id: UserId,
    pub tecnico_nome: String,
    #[serde(flatten)]
    pub attainment: Attainment,
}

/// Response body for `GET /dashboard`.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub counts: TaskCounts,
    /// Admin only: tallies per technician (unassigned bucket excluded).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub por_tecnico: Option<BTreeMap<String, TaskCounts>>,
    /// Admin only: screens finished this week vs. the weekly target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub produtividade_telas: Option<Vec<TechnicianAttainment>>,
    /// Admin only: hours worked this week vs. each account's target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub produtividade_horas: Option<Vec<TechnicianAttainment>>,
    /// Admin only; absent when nothing remains.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previsao: Option<CompletionProjection>,
}

/// GET /api/v1/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
) -> AppResult<Json<DataResponse<DashboardView>>> {
    let vocab = &state.config.status_vocabulary;

    // Scope the read by role: admins aggregate everything, technicians only
    // their own items.
    let scope = match user.perfil {
        Role::Administrador => None,
        Role::Tecnico => Some(user.id),
    };

    let rows = TaskRepo::list_status(&state.data, scope).await?;
    let open_ids = TimeEntryRepo::open_item_ids(&state.data, scope).await?;

    let items: Vec<StatusSnapshot> = rows.iter().map(|r| r.snapshot()).collect();
    let counts = summarize(&items, &open_ids, vocab);

    let view = match user.perfil {
        Role::Tecnico => DashboardView {
            counts,
            por_tecnico: None,
            produtividade_telas: None,
            produtividade_horas: None,
            previsao: None,
        },
        Role::Administrador => {
            let screens = ProductivityRepo::weekly_screens(&state.data).await?;
            let hours = ProductivityRepo::weekly_hours(&state.data).await?;

            let produtividade_telas = screens
                .into_iter()
                .map(|row| TechnicianAttainment {
                    tecnico_id: row.tecnico_id,
                    tecnico_nome: row.tecnico_nome,
                    attainment: weekly_attainment(
                        row.telas_finalizadas.unwrap_or(0) as f64,
                        DEFAULT_WEEKLY_TARGET as f64,
                    ),
                })
                .collect();

            let produtividade_horas = hours
                .into_iter()
                .map(|row| TechnicianAttainment {
                    tecnico_id: row.tecnico_id,
                    tecnico_nome: row.tecnico_nome,
                    attainment: weekly_attainment(
                        row.horas_trabalhadas.unwrap_or(0.0),
                        row.meta_semanal.unwrap_or(0.0),
                    ),
                })
                .collect();

            let previsao = project_completion(
                counts.pendentes,
                counts.trabalhando,
                HOURS_PER_SCREEN,
                HOURS_PER_DAY,
                Utc::now().date_naive(),
            );

            DashboardView {
                counts,
                por_tecnico: Some(group_by_technician(&items, &open_ids, vocab)),
                produtividade_telas: Some(produtividade_telas),
                produtividade_horas: Some(produtividade_horas),
                previsao,
            }
        }
    };

    Ok(Json(DataResponse { data: view }))
}
