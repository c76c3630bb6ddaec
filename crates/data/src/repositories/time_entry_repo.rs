//! Repository for the `apontamento_tempo` table (time entries).

use std::collections::HashSet;

use telas_core::types::{DbId, UserId};

use crate::client::{DataServiceClient, DataServiceError};
use crate::filter::{Dir, Filter};
use crate::models::time_entry::OpenEntry;

const TABLE: &str = "apontamento_tempo";

/// Provides the open-entry signal used by every "who is working" view.
pub struct TimeEntryRepo;

impl TimeEntryRepo {
    /// Ids of work items with an open time entry (`fim` is null), optionally
    /// scoped to one technician.
    ///
    /// The external procedures keep at most one open entry per item, so the
    /// result is naturally a set.
    pub async fn open_item_ids(
        client: &DataServiceClient,
        technician: Option<UserId>,
    ) -> Result<HashSet<DbId>, DataServiceError> {
        let mut filter = Filter::select("controle_api_id");
        if let Some(id) = technician {
            filter = filter.eq("tecnico_id", id);
        }
        filter = filter.is_null("fim").order("inicio", Dir::Desc);

        let rows: Vec<OpenEntry> = client.select(TABLE, &filter).await?;
        Ok(rows.into_iter().map(|r| r.controle_api_id).collect())
    }
}
