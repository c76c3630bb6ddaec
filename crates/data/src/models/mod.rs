//! Row models and DTOs mirroring the external schema.
//!
//! Field names match the external column names exactly — they are the wire
//! format. One struct per projection: the service selects different column
//! subsets per surface, and each subset deserializes into its own row type.

pub mod productivity;
pub mod task;
pub mod time_entry;
pub mod user;

pub use productivity::{AverageHoursRow, WeeklyHoursRow, WeeklyScreensRow};
pub use task::{
    CatalogScreen, CompletedTask, DifficultyLevel, Modulo, PendingFilter, PendingOrder,
    PendingTask, RegisterScreen, ScreenTask, StatusRow, TableKind,
};
pub use time_entry::OpenEntry;
pub use user::UserAccount;
