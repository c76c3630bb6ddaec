//! Rows from the weekly rollup views.
//!
//! These views are computed by the data service; the application only reads
//! them and applies banding client-side.

use serde::{Deserialize, Serialize};
use telas_core::types::UserId;

/// One row of `vw_horas_tecnico_semana`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyHoursRow {
    pub tecnico_id: UserId,
    pub tecnico_nome: String,
    pub meta_semanal: Option<f64>,
    pub horas_trabalhadas: Option<f64>,
}

/// One row of `vw_produtividade_telas_semana`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyScreensRow {
    pub tecnico_id: UserId,
    pub tecnico_nome: String,
    pub telas_finalizadas: Option<i64>,
}

/// The single row of `vw_media_horas_por_tela`.
#[derive(Debug, Clone, Deserialize)]
pub struct AverageHoursRow {
    pub media_horas_por_tela: Option<f64>,
}
