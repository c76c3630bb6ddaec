//! Repository for the weekly rollup views.

use crate::client::{DataServiceClient, DataServiceError};
use crate::filter::Filter;
use crate::models::productivity::{AverageHoursRow, WeeklyHoursRow, WeeklyScreensRow};

/// Read-only access to the server-computed productivity views.
pub struct ProductivityRepo;

impl ProductivityRepo {
    /// Hours worked this week per technician (`vw_horas_tecnico_semana`).
    pub async fn weekly_hours(
        client: &DataServiceClient,
    ) -> Result<Vec<WeeklyHoursRow>, DataServiceError> {
        let filter = Filter::select("tecnico_id,tecnico_nome,meta_semanal,horas_trabalhadas");
        client.select("vw_horas_tecnico_semana", &filter).await
    }

    /// Screens finished this week per technician
    /// (`vw_produtividade_telas_semana`).
    pub async fn weekly_screens(
        client: &DataServiceClient,
    ) -> Result<Vec<WeeklyScreensRow>, DataServiceError> {
        let filter = Filter::select("tecnico_id,tecnico_nome,telas_finalizadas");
        client.select("vw_produtividade_telas_semana", &filter).await
    }

    /// Average hours spent per finished screen (`vw_media_horas_por_tela`).
    pub async fn average_hours_per_screen(
        client: &DataServiceClient,
    ) -> Result<Option<f64>, DataServiceError> {
        let filter = Filter::select("media_horas_por_tela").limit(1);
        let rows: Vec<AverageHoursRow> = client.select("vw_media_horas_por_tela", &filter).await?;
        Ok(rows.into_iter().next().and_then(|r| r.media_horas_por_tela))
    }
}
