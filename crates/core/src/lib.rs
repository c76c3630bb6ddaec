//! Pure domain logic for the screen-development tracking dashboard.
//!
//! Everything in this crate is deterministic and free of I/O: the status
//! vocabulary, the work-item lifecycle state machine, aggregation and
//! productivity rollups, the completion-date projection, and the input
//! validation helpers. The `data` and `api` crates depend on this crate;
//! it depends on nothing internal.

pub mod error;
pub mod lifecycle;
pub mod naming;
pub mod productivity;
pub mod projection;
pub mod role;
pub mod status;
pub mod summary;
pub mod types;
pub mod validation;
