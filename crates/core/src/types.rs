/// Identifier for in-memory and persisted records.
pub type DbId = i64;
