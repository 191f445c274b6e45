use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AccessAction;

/// One row of the append-only access log.
///
/// Written once per login and per logout (forced logouts included), never
/// updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AccessLogEntry {
    pub id: String,
    pub uid: i64,
    pub action: AccessAction,
    /// Whether the action happened on the shared kiosk terminal.
    pub is_kiosk: bool,
    pub created_at: DateTime<Utc>,
}
