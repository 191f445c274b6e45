//! The arbitrator: forced-logout resolution ahead of every kiosk login.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use ergo_core::enums::AccessAction;

use crate::error::KioskError;
use crate::gateway::PresenceGateway;

/// Decision of a pre-login resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PreLoginOutcome {
    /// Nobody was online; the candidate may proceed.
    Idle,
    /// The candidate is already the online user; re-login is a no-op at
    /// this step.
    AlreadyOnline,
    /// A different user was online and has been forcibly logged out.
    ForcedLogout { uid: i64 },
}

/// Enforces "at most one online user" on the shared terminal.
///
/// Every public method takes the per-kiosk mutex, making each
/// read-decide-write sequence one logical transaction. Two racing login
/// attempts therefore serialize: the second observes the first's committed
/// state and force-logs it out instead of stacking a second online row.
pub struct KioskArbitrator<G> {
    gateway: G,
    lock: Mutex<()>,
}

impl<G: PresenceGateway> KioskArbitrator<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            lock: Mutex::new(()),
        }
    }

    /// Access the underlying gateway.
    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Resolve the kiosk row before `candidate_uid` logs in.
    ///
    /// If a different user is online, their forced logout (log entry +
    /// cleared flag) completes before this returns, so a subsequent reader
    /// never observes two online users. Calling this twice without an
    /// intervening login is safe: the second call observes the updated row
    /// and decides again, appending nothing new.
    ///
    /// # Errors
    ///
    /// Returns [`KioskError::Gateway`] if storage fails; the caller must
    /// abandon the login attempt.
    pub async fn resolve_pre_login(&self, candidate_uid: i64) -> Result<PreLoginOutcome, KioskError> {
        let _guard = self.lock.lock().await;
        self.resolve_locked(candidate_uid).await
    }

    /// Full login transition: pre-login resolution, then online flag and
    /// login log entry, all under one lock acquisition.
    ///
    /// # Errors
    ///
    /// Returns [`KioskError::Gateway`] if storage fails.
    pub async fn login(&self, uid: i64) -> Result<PreLoginOutcome, KioskError> {
        let _guard = self.lock.lock().await;
        let outcome = self.resolve_locked(uid).await?;
        self.gateway.set_online(uid, Utc::now()).await?;
        self.gateway
            .append_access_log(uid, AccessAction::Login, true)
            .await?;
        tracing::debug!(uid, ?outcome, "kiosk login committed");
        Ok(outcome)
    }

    /// Voluntary logout: log entry, then cleared flag.
    ///
    /// # Errors
    ///
    /// Returns [`KioskError::Gateway`] if storage fails.
    pub async fn logout(&self, uid: i64) -> Result<(), KioskError> {
        let _guard = self.lock.lock().await;
        self.gateway
            .append_access_log(uid, AccessAction::Logout, true)
            .await?;
        self.gateway.clear_online(uid).await?;
        tracing::debug!(uid, "kiosk logout committed");
        Ok(())
    }

    /// Heartbeat refresh — the Active(uid) self-loop. No log entry.
    ///
    /// # Errors
    ///
    /// Returns [`KioskError::Gateway`] if storage fails.
    pub async fn heartbeat(&self, uid: i64) -> Result<(), KioskError> {
        self.gateway.touch_heartbeat(uid, Utc::now()).await
    }

    async fn resolve_locked(&self, candidate_uid: i64) -> Result<PreLoginOutcome, KioskError> {
        match self.gateway.read_online_user().await? {
            None => Ok(PreLoginOutcome::Idle),
            Some(current) if current.uid == candidate_uid => Ok(PreLoginOutcome::AlreadyOnline),
            Some(current) => {
                tracing::info!(
                    previous_uid = current.uid,
                    candidate_uid,
                    "forcing logout of previous kiosk user"
                );
                self.gateway
                    .append_access_log(current.uid, AccessAction::Logout, true)
                    .await?;
                self.gateway.clear_online(current.uid).await?;
                Ok(PreLoginOutcome::ForcedLogout { uid: current.uid })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex as StdMutex;

    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;

    use ergo_core::entities::UserPresence;

    use super::*;

    #[derive(Default)]
    struct State {
        online: Option<UserPresence>,
        log: Vec<(i64, AccessAction, bool)>,
    }

    /// In-memory gateway recording every mutation, for arbitration tests.
    #[derive(Default)]
    struct RecordingGateway {
        state: StdMutex<State>,
    }

    impl RecordingGateway {
        fn with_online(uid: i64) -> Self {
            let gw = Self::default();
            gw.state.lock().unwrap().online = Some(UserPresence {
                uid,
                username: format!("user{uid}"),
                online: true,
                last_heartbeat: Some(Utc::now()),
            });
            gw
        }

        fn log(&self) -> Vec<(i64, AccessAction, bool)> {
            self.state.lock().unwrap().log.clone()
        }

        fn online_uid(&self) -> Option<i64> {
            self.state.lock().unwrap().online.as_ref().map(|p| p.uid)
        }
    }

    impl PresenceGateway for RecordingGateway {
        async fn read_online_user(&self) -> Result<Option<UserPresence>, KioskError> {
            Ok(self.state.lock().unwrap().online.clone())
        }

        async fn set_online(&self, uid: i64, at: DateTime<Utc>) -> Result<(), KioskError> {
            self.state.lock().unwrap().online = Some(UserPresence {
                uid,
                username: format!("user{uid}"),
                online: true,
                last_heartbeat: Some(at),
            });
            Ok(())
        }

        async fn clear_online(&self, uid: i64) -> Result<(), KioskError> {
            let mut state = self.state.lock().unwrap();
            if state.online.as_ref().is_some_and(|p| p.uid == uid) {
                state.online = None;
            }
            Ok(())
        }

        async fn touch_heartbeat(&self, uid: i64, at: DateTime<Utc>) -> Result<(), KioskError> {
            let mut state = self.state.lock().unwrap();
            if let Some(p) = state.online.as_mut().filter(|p| p.uid == uid) {
                p.last_heartbeat = Some(at);
            }
            Ok(())
        }

        async fn append_access_log(
            &self,
            uid: i64,
            action: AccessAction,
            is_kiosk: bool,
        ) -> Result<(), KioskError> {
            self.state.lock().unwrap().log.push((uid, action, is_kiosk));
            Ok(())
        }
    }

    #[tokio::test]
    async fn different_candidate_forces_exactly_one_logout() {
        let arb = KioskArbitrator::new(RecordingGateway::with_online(5));

        let outcome = arb.resolve_pre_login(7).await.unwrap();

        assert_eq!(outcome, PreLoginOutcome::ForcedLogout { uid: 5 });
        assert_eq!(arb.gateway().log(), vec![(5, AccessAction::Logout, true)]);
        assert_eq!(arb.gateway().online_uid(), None);
    }

    #[tokio::test]
    async fn same_candidate_is_a_no_op() {
        let arb = KioskArbitrator::new(RecordingGateway::with_online(5));

        let outcome = arb.resolve_pre_login(5).await.unwrap();

        assert_eq!(outcome, PreLoginOutcome::AlreadyOnline);
        assert_eq!(arb.gateway().log(), vec![]);
        assert_eq!(arb.gateway().online_uid(), Some(5));
    }

    #[tokio::test]
    async fn double_resolution_appends_nothing_new() {
        let arb = KioskArbitrator::new(RecordingGateway::with_online(5));

        let first = arb.resolve_pre_login(7).await.unwrap();
        let second = arb.resolve_pre_login(7).await.unwrap();

        assert_eq!(first, PreLoginOutcome::ForcedLogout { uid: 5 });
        // The second call observes the already-cleared row and repeats the
        // decision as a no-op: still exactly one logout entry.
        assert_eq!(second, PreLoginOutcome::Idle);
        assert_eq!(arb.gateway().log(), vec![(5, AccessAction::Logout, true)]);
    }

    #[tokio::test]
    async fn login_commits_forced_logout_before_the_candidate() {
        let arb = KioskArbitrator::new(RecordingGateway::with_online(5));

        let outcome = arb.login(7).await.unwrap();

        assert_eq!(outcome, PreLoginOutcome::ForcedLogout { uid: 5 });
        assert_eq!(
            arb.gateway().log(),
            vec![(5, AccessAction::Logout, true), (7, AccessAction::Login, true)]
        );
        assert_eq!(arb.gateway().online_uid(), Some(7));
    }

    #[tokio::test]
    async fn voluntary_logout_clears_and_logs() {
        let arb = KioskArbitrator::new(RecordingGateway::with_online(5));

        arb.logout(5).await.unwrap();

        assert_eq!(arb.gateway().log(), vec![(5, AccessAction::Logout, true)]);
        assert_eq!(arb.gateway().online_uid(), None);
    }

    #[tokio::test]
    async fn heartbeat_refreshes_without_logging() {
        let arb = KioskArbitrator::new(RecordingGateway::with_online(5));
        let before = arb
            .gateway()
            .state
            .lock()
            .unwrap()
            .online
            .as_ref()
            .and_then(|p| p.last_heartbeat)
            .unwrap();

        arb.heartbeat(5).await.unwrap();

        let after = arb
            .gateway()
            .state
            .lock()
            .unwrap()
            .online
            .as_ref()
            .and_then(|p| p.last_heartbeat)
            .unwrap();
        assert!(after >= before);
        assert_eq!(arb.gateway().log(), vec![]);
    }

    #[tokio::test]
    async fn racing_logins_serialize_to_a_single_online_user() {
        let arb = KioskArbitrator::new(RecordingGateway::default());

        let (a, b) = tokio::join!(arb.login(7), arb.login(9));
        a.unwrap();
        b.unwrap();

        // Whatever the interleaving, the loser of the race was force-logged
        // out by the winner: one online row, two logins, one logout.
        assert!(arb.gateway().online_uid().is_some());
        let log = arb.gateway().log();
        let logins = log.iter().filter(|(_, a, _)| *a == AccessAction::Login).count();
        let logouts = log.iter().filter(|(_, a, _)| *a == AccessAction::Logout).count();
        assert_eq!(logins, 2);
        assert_eq!(logouts, 1);
    }
}
