//! Account rows from the `usuario` table.

use serde::{Deserialize, Serialize};
use telas_core::role::Role;
use telas_core::types::UserId;

/// An account row, as selected at login.
///
/// The password column is never selected — the credential match happens in
/// the filter predicates, so the plaintext never enters the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: UserId,
    pub nome: String,
    pub login: String,
    pub perfil: Role,
    pub ativo: bool,
    /// Weekly screen target for productivity rollups.
    pub meta_semanal: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_service_payload() {
        let json = serde_json::json!({
            "id": "7f3b0a52-0000-0000-0000-000000000001",
            "nome": "Ana Souza",
            "login": "ana",
            "perfil": "Tecnico",
            "ativo": true,
            "meta_semanal": 5
        });
        let account: UserAccount = serde_json::from_value(json).unwrap();
        assert_eq!(account.login, "ana");
        assert_eq!(account.perfil, Role::Tecnico);
        assert_eq!(account.meta_semanal, Some(5));
    }
}
