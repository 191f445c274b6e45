//! ID prefix constants.
//!
//! IDs are generated by ergo-db as `<prefix>-<8 hex chars>` (see
//! `ErgoDb::generate_id`). Prefixes are three letters, fixed per table.

/// Persisted risk evaluations (`eva-a3f8b2c1`).
pub const PREFIX_EVALUATION: &str = "eva";

/// Access-log entries (`acc-a3f8b2c1`).
pub const PREFIX_ACCESS: &str = "acc";
