//! Config loading and service construction for command handlers.

use anyhow::Context;

use ergo_config::ErgoConfig;
use ergo_db::service::ErgoService;

use crate::cli::GlobalFlags;

/// Load layered configuration, applying the `--db` override.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<ErgoConfig> {
    let mut config = ErgoConfig::load_with_dotenv().context("failed to load configuration")?;
    if let Some(db) = &flags.db {
        config.db.path = db.clone();
    }
    tracing::debug!(db_path = %config.db.path, kiosk_terminal = config.kiosk.terminal, "configuration loaded");
    Ok(config)
}

/// Open the configured database.
pub async fn open_service(config: &ErgoConfig) -> anyhow::Result<ErgoService> {
    ErgoService::new_local(&config.db.path)
        .await
        .with_context(|| format!("failed to open database at {}", config.db.path))
}

/// Resolve a username to its presence row, failing on unknown names.
pub async fn require_user(
    service: &ErgoService,
    username: &str,
) -> anyhow::Result<ergo_core::entities::UserPresence> {
    service
        .get_user_by_name(username)
        .await?
        .with_context(|| format!("unknown user '{username}' — create it with `ergo user add`"))
}
