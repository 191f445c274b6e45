//! The storage contract the arbitrator requires — nothing more.

use chrono::{DateTime, Utc};

use ergo_core::entities::UserPresence;
use ergo_core::enums::AccessAction;

use crate::error::KioskError;

/// Durable operations on the kiosk's single online-user row and the
/// append-only access log.
///
/// The system models one shared terminal, so the gateway is not keyed by a
/// terminal id. Implementations must uphold two invariants:
///
/// - `clear_online` sets `online = false` and `last_heartbeat = NULL` in the
///   same statement.
/// - `touch_heartbeat` only applies while the user is online, so a heartbeat
///   racing a forced logout cannot resurrect a cleared row.
#[allow(async_fn_in_trait)]
pub trait PresenceGateway {
    /// The user currently online at the kiosk, if any.
    async fn read_online_user(&self) -> Result<Option<UserPresence>, KioskError>;

    /// Mark a user online with `at` as their first heartbeat.
    async fn set_online(&self, uid: i64, at: DateTime<Utc>) -> Result<(), KioskError>;

    /// Clear the online flag and heartbeat for a user.
    async fn clear_online(&self, uid: i64) -> Result<(), KioskError>;

    /// Refresh the heartbeat of an online user. No-op when offline.
    async fn touch_heartbeat(&self, uid: i64, at: DateTime<Utc>) -> Result<(), KioskError>;

    /// Append one access-log entry. The log is append-only; entries are
    /// never updated or deleted.
    async fn append_access_log(
        &self,
        uid: i64,
        action: AccessAction,
        is_kiosk: bool,
    ) -> Result<(), KioskError>;
}
