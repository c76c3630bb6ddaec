//! User roles.

use serde::{Deserialize, Serialize};

/// Closed set of account roles.
///
/// The external `usuario.perfil` column stores the Portuguese spellings;
/// view selection must match exhaustively on this enum rather than compare
/// strings, so adding a third role is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Administrador")]
    Administrador,
    #[serde(rename = "Tecnico")]
    Tecnico,
}

impl Role {
    pub fn is_admin(self) -> bool {
        match self {
            Self::Administrador => true,
            Self::Tecnico => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_schema_spellings() {
        assert_eq!(
            serde_json::to_string(&Role::Administrador).unwrap(),
            "\"Administrador\""
        );
        let role: Role = serde_json::from_str("\"Tecnico\"").unwrap();
        assert_eq!(role, Role::Tecnico);
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(serde_json::from_str::<Role>("\"Gerente\"").is_err());
    }

    #[test]
    fn admin_flag() {
        assert!(Role::Administrador.is_admin());
        assert!(!Role::Tecnico.is_admin());
    }
}
