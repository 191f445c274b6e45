//! `PresenceGateway` binding: the kiosk arbitrator talking to libSQL.

use chrono::{DateTime, Utc};

use ergo_core::entities::UserPresence;
use ergo_core::enums::AccessAction;
use ergo_kiosk::{KioskError, PresenceGateway};

use crate::error::DatabaseError;
use crate::service::ErgoService;

fn gateway_err(e: DatabaseError) -> KioskError {
    KioskError::Gateway(e.into())
}

impl PresenceGateway for ErgoService {
    async fn read_online_user(&self) -> Result<Option<UserPresence>, KioskError> {
        self.online_user().await.map_err(gateway_err)
    }

    async fn set_online(&self, uid: i64, at: DateTime<Utc>) -> Result<(), KioskError> {
        self.mark_online(uid, at).await.map_err(gateway_err)
    }

    async fn clear_online(&self, uid: i64) -> Result<(), KioskError> {
        self.mark_offline(uid).await.map_err(gateway_err)
    }

    async fn touch_heartbeat(&self, uid: i64, at: DateTime<Utc>) -> Result<(), KioskError> {
        self.record_heartbeat(uid, at).await.map_err(gateway_err)
    }

    async fn append_access_log(
        &self,
        uid: i64,
        action: AccessAction,
        is_kiosk: bool,
    ) -> Result<(), KioskError> {
        self.append_access(uid, action, is_kiosk)
            .await
            .map(|_| ())
            .map_err(gateway_err)
    }
}
