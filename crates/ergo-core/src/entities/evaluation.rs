use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::assessment::AssessmentResult;

/// A persisted risk evaluation, keyed by user and creation time.
///
/// Flattened into the `evaluations` table by ergo-db; the nested
/// `AssessmentResult` keeps the stored record bit-identical to what the
/// engine produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Evaluation {
    pub id: String,
    pub uid: i64,
    /// Optional human label ("postazione B, scaffale alto", …).
    pub name: Option<String>,
    pub result: AssessmentResult,
    pub created_at: DateTime<Utc>,
}
