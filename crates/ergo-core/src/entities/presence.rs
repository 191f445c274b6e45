use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A user row as seen by the kiosk arbitrator: who is online and when they
/// last confirmed activity.
///
/// Invariant: `online == true` implies `last_heartbeat` holds the time of
/// the last confirmed activity; a logout (voluntary or forced) sets
/// `online = false` and `last_heartbeat = None` together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UserPresence {
    pub uid: i64,
    pub username: String,
    pub online: bool,
    pub last_heartbeat: Option<DateTime<Utc>>,
}
