//! Kiosk terminal configuration.

use serde::{Deserialize, Serialize};

/// Default heartbeat staleness threshold in seconds.
const fn default_heartbeat_stale_secs() -> i64 {
    300
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KioskConfig {
    /// Whether this machine is the shared kiosk terminal. Access-log
    /// entries written here carry the kiosk flag accordingly.
    #[serde(default)]
    pub terminal: bool,

    /// Seconds a heartbeat may go unrefreshed before an online session
    /// counts as stale (see the arbitration crate's staleness policy).
    #[serde(default = "default_heartbeat_stale_secs")]
    pub heartbeat_stale_secs: i64,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            terminal: false,
            heartbeat_stale_secs: default_heartbeat_stale_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = KioskConfig::default();
        assert!(!config.terminal);
        assert_eq!(config.heartbeat_stale_secs, 300);
    }
}
