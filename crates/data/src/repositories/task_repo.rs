//! Repository for the `controle_api` table (work items / screens).

use serde::Serialize;
use telas_core::status::StatusVocabulary;
use telas_core::types::{DbId, Timestamp, UserId};

use crate::client::{DataServiceClient, DataServiceError};
use crate::filter::{Dir, Filter};
use crate::models::task::{
    CatalogScreen, CompletedTask, Modulo, PendingFilter, PendingTask, RegisterScreen, ScreenTask,
    StatusRow, TableKind,
};

/// The work-item table.
const TABLE: &str = "controle_api";

/// Column list for full task rows.
const TASK_COLUMNS: &str = "id,nome_tabela,tipo_tabela,modulo,qtd_campos,nivel_api,peso_api,\
                            tela,tecnico_id,tecnico_nome,status_api,status_teste,\
                            status_documentacao,observacoes,data_inicio,data_fim_real";

/// Column list for dashboard aggregation.
const STATUS_COLUMNS: &str =
    "id,tecnico_id,tecnico_nome,status_api,status_teste,status_documentacao,modulo";

/// Column list for the pending board.
const PENDING_COLUMNS: &str = "id,nome_tabela,tipo_tabela,nivel_api,qtd_campos,modulo,created_at";

/// Column list for the completed summary.
const COMPLETED_COLUMNS: &str = "id,nome_tabela,tela,tecnico_nome";

/// Column list for the registration catalog.
const CATALOG_COLUMNS: &str =
    "id,nome_tabela,tipo_tabela,modulo,qtd_campos,nivel_api,peso_api,created_at,updated_at";

// ---------------------------------------------------------------------------
// Write payloads
// ---------------------------------------------------------------------------

/// SET list of the claim update.
#[derive(Debug, Serialize)]
struct ClaimSet<'a> {
    tecnico_id: UserId,
    tecnico_nome: &'a str,
    tela: &'a str,
    status_api: &'a str,
    data_inicio: Timestamp,
}

/// Insert/update payload for the registration form.
#[derive(Debug, Serialize)]
struct ScreenRow<'a> {
    nome_tabela: &'a str,
    tipo_tabela: TableKind,
    modulo: Modulo,
    qtd_campos: i64,
    usuario_id: UserId,
}

/// Notes-only patch.
#[derive(Debug, Serialize)]
struct NotesSet<'a> {
    observacoes: Option<&'a str>,
}

/// Provides read projections and conditional writes for work items.
pub struct TaskRepo;

impl TaskRepo {
    /// Status projection of every work item, or of one technician's items.
    pub async fn list_status(
        client: &DataServiceClient,
        technician: Option<UserId>,
    ) -> Result<Vec<StatusRow>, DataServiceError> {
        let mut filter = Filter::select(STATUS_COLUMNS);
        if let Some(id) = technician {
            filter = filter.eq("tecnico_id", id);
        }
        client.select(TABLE, &filter).await
    }

    /// A technician's assigned tasks, oldest first.
    pub async fn list_assigned(
        client: &DataServiceClient,
        technician: UserId,
    ) -> Result<Vec<ScreenTask>, DataServiceError> {
        let filter = Filter::select(TASK_COLUMNS)
            .eq("tecnico_id", technician)
            .order("created_at", Dir::Asc);
        client.select(TABLE, &filter).await
    }

    /// One task by id.
    pub async fn find_by_id(
        client: &DataServiceClient,
        id: DbId,
    ) -> Result<Option<ScreenTask>, DataServiceError> {
        let filter = Filter::select(TASK_COLUMNS).eq("id", id).limit(1);
        let rows: Vec<ScreenTask> = client.select(TABLE, &filter).await?;
        Ok(rows.into_iter().next())
    }

    /// Claimable tasks: unassigned and still pending on the API facet, with
    /// the board's optional filters and whitelisted ordering.
    pub async fn list_pending(
        client: &DataServiceClient,
        params: &PendingFilter,
        vocab: &StatusVocabulary,
    ) -> Result<Vec<PendingTask>, DataServiceError> {
        let mut filter = Filter::select(PENDING_COLUMNS)
            .is_null("tecnico_id")
            .eq("status_api", &vocab.pending);

        if let Some(kind) = params.tipo_tabela {
            filter = filter.eq("tipo_tabela", serde_plain(&kind));
        }
        if let Some(level) = params.nivel_api {
            filter = filter.eq("nivel_api", serde_plain(&level));
        }
        if let Some(min) = params.min_campos {
            filter = filter.gte("qtd_campos", min);
        }
        if let Some(max) = params.max_campos {
            filter = filter.lte("qtd_campos", max);
        }
        filter = filter.order(params.order_by.column(), params.direction());

        client.select(TABLE, &filter).await
    }

    /// Tasks whose three sub-statuses all carry the terminal value.
    pub async fn list_completed(
        client: &DataServiceClient,
        vocab: &StatusVocabulary,
    ) -> Result<Vec<CompletedTask>, DataServiceError> {
        let filter = Filter::select(COMPLETED_COLUMNS)
            .eq("status_api", &vocab.terminal)
            .eq("status_teste", &vocab.terminal)
            .eq("status_documentacao", &vocab.terminal);
        client.select(TABLE, &filter).await
    }

    /// Full catalog for the registration screen, alphabetical.
    pub async fn list_catalog(
        client: &DataServiceClient,
    ) -> Result<Vec<CatalogScreen>, DataServiceError> {
        let filter = Filter::select(CATALOG_COLUMNS).order("nome_tabela", Dir::Asc);
        client.select(TABLE, &filter).await
    }

    /// Attempt to claim an unassigned task for a technician.
    ///
    /// This is the single conditional update guarding the unassigned →
    /// assigned transition: the WHERE clause requires `tecnico_id` still
    /// null, so of two concurrent claims at most one can match — assuming,
    /// as the whole protocol does, that the data service applies the
    /// match-and-update atomically. `Ok(None)` means the race was lost:
    /// zero rows came back and nothing was modified.
    pub async fn claim(
        client: &DataServiceClient,
        id: DbId,
        technician: UserId,
        technician_name: &str,
        screen_label: &str,
        vocab: &StatusVocabulary,
        now: Timestamp,
    ) -> Result<Option<ScreenTask>, DataServiceError> {
        let filter = Filter::new().eq("id", id).is_null("tecnico_id");
        let set = ClaimSet {
            tecnico_id: technician,
            tecnico_nome: technician_name,
            tela: screen_label,
            status_api: &vocab.working,
            data_inicio: now,
        };

        let mut rows: Vec<ScreenTask> = client.update_where(TABLE, &filter, &set).await?;
        Ok(rows.pop())
    }

    /// Register a new screen; returns the created row with the
    /// server-computed difficulty and weight.
    pub async fn register(
        client: &DataServiceClient,
        input: &RegisterScreen,
        normalized_name: &str,
        registrar: UserId,
    ) -> Result<Option<CatalogScreen>, DataServiceError> {
        let row = ScreenRow {
            nome_tabela: normalized_name,
            tipo_tabela: input.tipo_tabela,
            modulo: input.modulo,
            qtd_campos: input.qtd_campos,
            usuario_id: registrar,
        };
        let mut rows: Vec<CatalogScreen> = client.insert_returning(TABLE, &row).await?;
        Ok(rows.pop())
    }

    /// Update a screen's registration fields by id.
    ///
    /// Returns the updated row, or `None` when the id matched nothing.
    pub async fn update_screen(
        client: &DataServiceClient,
        id: DbId,
        input: &RegisterScreen,
        normalized_name: &str,
        registrar: UserId,
    ) -> Result<Option<CatalogScreen>, DataServiceError> {
        let filter = Filter::new().eq("id", id);
        let row = ScreenRow {
            nome_tabela: normalized_name,
            tipo_tabela: input.tipo_tabela,
            modulo: input.modulo,
            qtd_campos: input.qtd_campos,
            usuario_id: registrar,
        };
        let mut rows: Vec<CatalogScreen> = client.update_where(TABLE, &filter, &row).await?;
        Ok(rows.pop())
    }

    /// Delete a screen by id.
    pub async fn delete(client: &DataServiceClient, id: DbId) -> Result<(), DataServiceError> {
        let filter = Filter::new().eq("id", id);
        client.delete_where(TABLE, &filter).await
    }

    /// Replace a task's free-text notes.
    ///
    /// Returns the updated row, or `None` when the id matched nothing.
    pub async fn set_notes(
        client: &DataServiceClient,
        id: DbId,
        notes: Option<&str>,
    ) -> Result<Option<ScreenTask>, DataServiceError> {
        let filter = Filter::new().eq("id", id);
        let set = NotesSet { observacoes: notes };
        let mut rows: Vec<ScreenTask> = client.update_where(TABLE, &filter, &set).await?;
        Ok(rows.pop())
    }
}

/// Render an enum through its serde spelling, for filter values.
fn serde_plain<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => s,
        other => panic!("expected a string-serializing enum, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::task::{DifficultyLevel, TableKind};

    #[test]
    fn serde_plain_renders_schema_spellings() {
        assert_eq!(serde_plain(&TableKind::Documento), "Documento");
        assert_eq!(serde_plain(&crate::models::task::Modulo::Wms), "WMS");
        assert_eq!(serde_plain(&DifficultyLevel::Senior), "Senior");
    }
}
