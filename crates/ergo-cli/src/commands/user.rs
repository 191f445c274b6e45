//! Handle `ergo user`: minimal provisioning (no credentials here).

use ergo_config::ErgoConfig;

use crate::bootstrap;
use crate::cli::{GlobalFlags, UserCommands};
use crate::output;

pub async fn handle(
    action: &UserCommands,
    config: &ErgoConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = bootstrap::open_service(config).await?;

    match action {
        UserCommands::Add { name } => {
            let created = service.create_user(name).await?;
            output::output(&created, flags.format)
        }
    }
}
