//! Domain-level error taxonomy shared by every layer above this crate.

/// Errors produced by domain logic and surfaced through the API layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound {
        /// Entity name for the message (e.g. `"task"`).
        entity: &'static str,
        /// The id that failed to resolve.
        id: String,
    },

    /// Input failed a validation rule before any network call was made.
    #[error("{0}")]
    Validation(String),

    /// The requested change conflicts with current state (e.g. a lost claim).
    #[error("{0}")]
    Conflict(String),

    /// No session, or the credentials did not match.
    #[error("{0}")]
    Unauthorized(String),

    /// The session exists but lacks the required role.
    #[error("{0}")]
    Forbidden(String),

    /// An unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}
