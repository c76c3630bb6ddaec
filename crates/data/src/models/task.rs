//! Work-item ("screen") row models and DTOs for the `controle_api` table.

use serde::{Deserialize, Serialize};
use telas_core::types::{DbId, Timestamp, UserId};
use validator::Validate;

use crate::filter::Dir;

// ---------------------------------------------------------------------------
// Closed value sets
// ---------------------------------------------------------------------------

/// Kind of screen being tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableKind {
    Cadastro,
    Documento,
}

/// Product module a screen belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modulo {
    Operacao,
    Financeiro,
    #[serde(rename = "WMS")]
    Wms,
    Seguranca,
    Oficina,
}

/// Difficulty level derived server-side from the field count.
///
/// Read-only from the client's perspective: it is never written, only
/// displayed and filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyLevel {
    Facil,
    Medio,
    Dificil,
    Senior,
}

// ---------------------------------------------------------------------------
// Row projections
// ---------------------------------------------------------------------------

/// Full task row as fetched for a technician's own list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenTask {
    pub id: DbId,
    pub nome_tabela: String,
    pub tipo_tabela: TableKind,
    pub modulo: Modulo,
    pub qtd_campos: i64,
    /// Server-computed difficulty; absent until the insert trigger ran.
    pub nivel_api: Option<DifficultyLevel>,
    /// Server-computed weight.
    pub peso_api: Option<f64>,
    /// Screen label set at claim time.
    pub tela: Option<String>,
    pub tecnico_id: Option<UserId>,
    pub tecnico_nome: Option<String>,
    pub status_api: String,
    pub status_teste: String,
    pub status_documentacao: String,
    pub observacoes: Option<String>,
    pub data_inicio: Option<Timestamp>,
    pub data_fim_real: Option<Timestamp>,
}

/// Status-only projection for dashboard aggregation.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusRow {
    pub id: DbId,
    pub tecnico_id: Option<UserId>,
    pub tecnico_nome: Option<String>,
    pub status_api: String,
    pub status_teste: String,
    pub status_documentacao: String,
    pub modulo: Modulo,
}

impl StatusRow {
    /// View for the pure aggregation functions.
    pub fn snapshot(&self) -> telas_core::summary::StatusSnapshot {
        telas_core::summary::StatusSnapshot {
            id: self.id,
            tecnico_nome: self.tecnico_nome.clone(),
            status_api: self.status_api.clone(),
            status_teste: self.status_teste.clone(),
            status_documentacao: self.status_documentacao.clone(),
        }
    }
}

/// Claimable-task projection for the pending board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingTask {
    pub id: DbId,
    pub nome_tabela: String,
    pub tipo_tabela: TableKind,
    pub nivel_api: Option<DifficultyLevel>,
    pub qtd_campos: i64,
    pub modulo: Modulo,
    pub created_at: Timestamp,
}

/// Finished-work projection for the completed summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedTask {
    pub id: DbId,
    pub nome_tabela: String,
    pub tela: Option<String>,
    pub tecnico_nome: Option<String>,
}

/// Catalog projection for the registration screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogScreen {
    pub id: DbId,
    pub nome_tabela: String,
    pub tipo_tabela: TableKind,
    pub modulo: Modulo,
    pub qtd_campos: i64,
    pub nivel_api: Option<DifficultyLevel>,
    pub peso_api: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// Write DTOs
// ---------------------------------------------------------------------------

/// Payload for registering or updating a screen.
///
/// `nivel_api` / `peso_api` are deliberately absent: the data service
/// computes them from `qtd_campos`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterScreen {
    #[validate(length(min = 1, message = "nome_tabela must not be empty"))]
    pub nome_tabela: String,
    pub tipo_tabela: TableKind,
    pub modulo: Modulo,
    #[validate(range(min = 1, message = "qtd_campos must be greater than zero"))]
    pub qtd_campos: i64,
}

// ---------------------------------------------------------------------------
// Pending-board filters
// ---------------------------------------------------------------------------

/// Whitelisted ordering columns for the pending board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingOrder {
    TipoTabela,
    NivelApi,
    #[default]
    QtdCampos,
}

impl PendingOrder {
    pub fn column(self) -> &'static str {
        match self {
            Self::TipoTabela => "tipo_tabela",
            Self::NivelApi => "nivel_api",
            Self::QtdCampos => "qtd_campos",
        }
    }
}

/// Optional filters and ordering for the pending board.
#[derive(Debug, Clone, Default)]
pub struct PendingFilter {
    pub tipo_tabela: Option<TableKind>,
    pub nivel_api: Option<DifficultyLevel>,
    pub min_campos: Option<i64>,
    pub max_campos: Option<i64>,
    pub order_by: PendingOrder,
    pub descending: bool,
}

impl PendingFilter {
    pub(crate) fn direction(&self) -> Dir {
        if self.descending {
            Dir::Desc
        } else {
            Dir::Asc
        }
    }
}
