//! Status vocabulary and sub-status field identifiers.
//!
//! The external schema stores three independent sub-statuses per work item
//! (`status_api`, `status_teste`, `status_documentacao`), each holding one of
//! three values: pending, working, terminal. Two schema generations spelled
//! the terminal value differently (`Finalizado` vs `OK`), so the spellings
//! are configuration resolved once at startup — no call site hard-codes them.

use serde::{Deserialize, Serialize};

/// Environment variable overriding the pending spelling.
pub const ENV_STATUS_PENDING: &str = "STATUS_PENDING";
/// Environment variable overriding the working spelling.
pub const ENV_STATUS_WORKING: &str = "STATUS_WORKING";
/// Environment variable overriding the terminal spelling.
pub const ENV_STATUS_TERMINAL: &str = "STATUS_TERMINAL";

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

/// The three status spellings used by the live external schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusVocabulary {
    /// Not started (e.g. `"Pendente"`).
    pub pending: String,
    /// In progress (e.g. `"Trabalhando"`).
    pub working: String,
    /// Done (e.g. `"Finalizado"`; the legacy generation used `"OK"`).
    pub terminal: String,
}

impl Default for StatusVocabulary {
    fn default() -> Self {
        Self {
            pending: "Pendente".into(),
            working: "Trabalhando".into(),
            terminal: "Finalizado".into(),
        }
    }
}

impl StatusVocabulary {
    /// Resolve the vocabulary from the environment, falling back to the
    /// current schema generation's spellings.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            pending: std::env::var(ENV_STATUS_PENDING).unwrap_or(defaults.pending),
            working: std::env::var(ENV_STATUS_WORKING).unwrap_or(defaults.working),
            terminal: std::env::var(ENV_STATUS_TERMINAL).unwrap_or(defaults.terminal),
        }
    }

    /// Whether `value` is this vocabulary's terminal spelling.
    pub fn is_terminal(&self, value: &str) -> bool {
        value == self.terminal
    }

    /// Whether `value` is a known spelling at all.
    pub fn is_known(&self, value: &str) -> bool {
        value == self.pending || value == self.working || value == self.terminal
    }
}

// ---------------------------------------------------------------------------
// Sub-status fields
// ---------------------------------------------------------------------------

/// The three sub-status columns of a work item.
///
/// Closed enum so a fourth facet is a compile-time-checked addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusField {
    #[serde(rename = "status_api")]
    Api,
    #[serde(rename = "status_teste")]
    Teste,
    #[serde(rename = "status_documentacao")]
    Documentacao,
}

impl StatusField {
    /// Column name in the external schema, also the RPC `p_campo` value.
    pub fn column_name(self) -> &'static str {
        match self {
            Self::Api => "status_api",
            Self::Teste => "status_teste",
            Self::Documentacao => "status_documentacao",
        }
    }

    /// All three fields, in schema order.
    pub fn all() -> [StatusField; 3] {
        [Self::Api, Self::Teste, Self::Documentacao]
    }
}
