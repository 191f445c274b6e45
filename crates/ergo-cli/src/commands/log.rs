//! Handle `ergo log`: access-log listing with filters.

use anyhow::bail;

use ergo_config::ErgoConfig;
use ergo_core::enums::AccessAction;
use ergo_db::repos::AccessLogFilter;

use crate::bootstrap;
use crate::cli::{GlobalFlags, LogArgs};
use crate::output;

pub async fn handle(
    args: &LogArgs,
    config: &ErgoConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = bootstrap::open_service(config).await?;

    let uid = match &args.user {
        Some(name) => Some(bootstrap::require_user(&service, name).await?.uid),
        None => None,
    };
    let action = match args.action.as_deref() {
        None => None,
        Some("login") => Some(AccessAction::Login),
        Some("logout") => Some(AccessAction::Logout),
        Some(other) => bail!("unknown action '{other}' (expected login or logout)"),
    };

    let entries = service
        .query_access(&AccessLogFilter {
            uid,
            action,
            kiosk_only: args.kiosk,
            limit: Some(flags.limit.unwrap_or(config.general.default_limit)),
        })
        .await?;

    output::output(&entries, flags.format)
}
