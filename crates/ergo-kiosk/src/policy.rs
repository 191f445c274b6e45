//! Heartbeat staleness policy.
//!
//! The arbitrator does not schedule expiry checks; callers (the CLI `status`
//! command, a future web layer) evaluate this predicate when they care.

use chrono::{DateTime, Duration, Utc};

use ergo_core::entities::UserPresence;

/// How long a heartbeat may go unrefreshed before an online session counts
/// as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StalePolicy {
    pub max_idle: Duration,
}

impl StalePolicy {
    #[must_use]
    pub fn from_secs(secs: i64) -> Self {
        Self {
            max_idle: Duration::seconds(secs),
        }
    }

    /// Whether an online session has outlived its heartbeat. Offline rows
    /// are never stale; an online row with no heartbeat always is.
    #[must_use]
    pub fn is_stale(&self, presence: &UserPresence, now: DateTime<Utc>) -> bool {
        if !presence.online {
            return false;
        }
        presence
            .last_heartbeat
            .is_none_or(|hb| now - hb > self.max_idle)
    }
}

impl Default for StalePolicy {
    /// Five minutes, the `kiosk.heartbeat_stale_secs` config default.
    fn default() -> Self {
        Self::from_secs(300)
    }
}
