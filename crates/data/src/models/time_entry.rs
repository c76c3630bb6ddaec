//! Time-entry projections for the `apontamento_tempo` table.
//!
//! A time entry is open while its `fim` column is null; the external
//! procedures guarantee at most one open entry per work item. The service
//! only ever needs the open entries' work-item ids — the "who is actually
//! working" signal — so that is the only projection fetched.

use serde::Deserialize;
use telas_core::types::DbId;

/// One open time entry, reduced to the work item it belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenEntry {
    pub controle_api_id: DbId,
}
