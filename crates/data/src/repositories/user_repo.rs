//! Repository for the `usuario` table (accounts).

use crate::client::{DataServiceClient, DataServiceError};
use crate::filter::Filter;
use crate::models::user::UserAccount;

const TABLE: &str = "usuario";

const ACCOUNT_COLUMNS: &str = "id,nome,login,perfil,ativo,meta_semanal";

/// Account lookups.
pub struct UserRepo;

impl UserRepo {
    /// Find an active account matching `login` and `senha`.
    ///
    /// The credential match is expressed as filter predicates and evaluated
    /// by the data service against the stored plaintext — trusted as-is; no
    /// hashing exists on either side. `None` means wrong credentials or an
    /// inactive account; the two are indistinguishable by design.
    pub async fn find_active_by_credentials(
        client: &DataServiceClient,
        login: &str,
        senha: &str,
    ) -> Result<Option<UserAccount>, DataServiceError> {
        let filter = Filter::select(ACCOUNT_COLUMNS)
            .eq("login", login)
            .eq("senha", senha)
            .is_true("ativo")
            .limit(1);
        let rows: Vec<UserAccount> = client.select(TABLE, &filter).await?;
        Ok(rows.into_iter().next())
    }

    /// Cheap reachability probe for the health endpoint.
    pub async fn ping(client: &DataServiceClient) -> Result<(), DataServiceError> {
        let filter = Filter::select("id").limit(1);
        let _rows: Vec<serde_json::Value> = client.select(TABLE, &filter).await?;
        Ok(())
    }
}
