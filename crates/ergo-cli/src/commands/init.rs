//! Handle `ergo init`: create the database file and schema.

use ergo_config::ErgoConfig;

use crate::bootstrap;

pub async fn handle(config: &ErgoConfig) -> anyhow::Result<()> {
    bootstrap::open_service(config).await?;
    println!("database ready at {}", config.db.path);
    Ok(())
}
