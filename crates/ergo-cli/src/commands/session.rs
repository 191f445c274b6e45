//! Handle `ergo login`, `logout`, `heartbeat`, and `status` — the kiosk
//! session lifecycle.
//!
//! On the kiosk terminal every login goes through the arbitrator, which
//! resolves the online row (forced logout of a different user) before
//! committing. Off-kiosk, a login is just an access-log entry: the online
//! row models presence at the shared terminal only.

use chrono::Utc;
use serde::Serialize;

use ergo_config::ErgoConfig;
use ergo_core::enums::AccessAction;
use ergo_kiosk::{KioskArbitrator, PreLoginOutcome, StalePolicy};

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::output;

#[derive(Debug, Serialize)]
struct LoginReport {
    uid: i64,
    username: String,
    forced_logout_uid: Option<i64>,
}

#[derive(Debug, Serialize)]
struct StatusReport {
    online_uid: Option<i64>,
    online_username: Option<String>,
    last_heartbeat: Option<String>,
    stale: bool,
}

pub async fn login(
    username: &str,
    config: &ErgoConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = bootstrap::open_service(config).await?;
    let user = bootstrap::require_user(&service, username).await?;

    let forced_logout_uid = if config.kiosk.terminal {
        let arbitrator = KioskArbitrator::new(service);
        match arbitrator.login(user.uid).await? {
            PreLoginOutcome::ForcedLogout { uid } => Some(uid),
            PreLoginOutcome::Idle | PreLoginOutcome::AlreadyOnline => None,
        }
    } else {
        service
            .append_access(user.uid, AccessAction::Login, false)
            .await?;
        None
    };

    output::output(
        &LoginReport {
            uid: user.uid,
            username: user.username,
            forced_logout_uid,
        },
        flags.format,
    )
}

pub async fn logout(
    username: &str,
    config: &ErgoConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = bootstrap::open_service(config).await?;
    let user = bootstrap::require_user(&service, username).await?;

    if config.kiosk.terminal {
        let arbitrator = KioskArbitrator::new(service);
        arbitrator.logout(user.uid).await?;
    } else {
        service
            .append_access(user.uid, AccessAction::Logout, false)
            .await?;
    }

    output::output(
        &serde_json::json!({ "uid": user.uid, "logged_out": true }),
        flags.format,
    )
}

pub async fn heartbeat(
    username: &str,
    config: &ErgoConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = bootstrap::open_service(config).await?;
    let user = bootstrap::require_user(&service, username).await?;

    let arbitrator = KioskArbitrator::new(service);
    arbitrator.heartbeat(user.uid).await?;

    output::output(
        &serde_json::json!({ "uid": user.uid, "heartbeat": true }),
        flags.format,
    )
}

pub async fn status(config: &ErgoConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let service = bootstrap::open_service(config).await?;
    let online = service.online_user().await?;

    let policy = StalePolicy::from_secs(config.kiosk.heartbeat_stale_secs);
    let report = match online {
        Some(p) => StatusReport {
            stale: policy.is_stale(&p, Utc::now()),
            online_uid: Some(p.uid),
            online_username: Some(p.username),
            last_heartbeat: p.last_heartbeat.map(|t| t.to_rfc3339()),
        },
        None => StatusReport {
            online_uid: None,
            online_username: None,
            last_heartbeat: None,
            stale: false,
        },
    };

    output::output(&report, flags.format)
}
