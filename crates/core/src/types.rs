/// Work items and time entries are keyed by BIGSERIAL ids assigned by the
/// external data service.
pub type DbId = i64;

/// User accounts are keyed by UUIDs assigned by the external data service.
pub type UserId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
