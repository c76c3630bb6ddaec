//! Stored-procedure calls for work-item lifecycle transitions.
//!
//! Every timer and status transition is executed server-side by one of five
//! procedures; the application selects the call, it never reimplements the
//! effect. Parameters are named with the service's `p_` convention.

use serde_json::json;
use telas_core::status::StatusField;
use telas_core::types::{DbId, UserId};

use crate::client::{DataServiceClient, DataServiceError};

/// The five work-lifecycle procedures.
pub struct WorkRpc;

impl WorkRpc {
    /// Open the first time entry for (item, technician).
    pub async fn iniciar(
        client: &DataServiceClient,
        item: DbId,
        technician: UserId,
        technician_name: &str,
    ) -> Result<(), DataServiceError> {
        client
            .rpc_unit(
                "iniciar_trabalho",
                &json!({
                    "p_controle_api_id": item,
                    "p_tecnico_id": technician,
                    "p_tecnico_nome": technician_name,
                }),
            )
            .await
    }

    /// Close the open time entry.
    pub async fn pausar(
        client: &DataServiceClient,
        item: DbId,
        technician: UserId,
    ) -> Result<(), DataServiceError> {
        client
            .rpc_unit(
                "pausar_trabalho",
                &json!({
                    "p_controle_api_id": item,
                    "p_tecnico_id": technician,
                }),
            )
            .await
    }

    /// Open a new time entry after a pause. Distinguished from
    /// [`iniciar`](Self::iniciar) only for the service's bookkeeping.
    pub async fn retomar(
        client: &DataServiceClient,
        item: DbId,
        technician: UserId,
        technician_name: &str,
    ) -> Result<(), DataServiceError> {
        client
            .rpc_unit(
                "retomar_trabalho",
                &json!({
                    "p_controle_api_id": item,
                    "p_tecnico_id": technician,
                    "p_tecnico_nome": technician_name,
                }),
            )
            .await
    }

    /// Set the actual-finish timestamp; the item becomes immutable.
    pub async fn finalizar(
        client: &DataServiceClient,
        item: DbId,
        technician: UserId,
    ) -> Result<(), DataServiceError> {
        client
            .rpc_unit(
                "finalizar_trabalho",
                &json!({
                    "p_controle_api_id": item,
                    "p_tecnico_id": technician,
                }),
            )
            .await
    }

    /// Set one sub-status field to one of the vocabulary values.
    pub async fn atualizar_status(
        client: &DataServiceClient,
        item: DbId,
        field: StatusField,
        status: &str,
    ) -> Result<(), DataServiceError> {
        client
            .rpc_unit(
                "atualizar_status",
                &json!({
                    "p_controle_api_id": item,
                    "p_campo": field.column_name(),
                    "p_status": status,
                }),
            )
            .await
    }
}
