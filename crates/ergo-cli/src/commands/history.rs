//! Handle `ergo history`: per-user evaluation listing, newest first.

use serde::Serialize;

use ergo_config::ErgoConfig;
use ergo_core::entities::Evaluation;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::output;

/// Compact row for history listings; the full record stays available via
/// JSON output of `assess`.
#[derive(Debug, Serialize)]
struct HistoryRow {
    id: String,
    name: Option<String>,
    weight: f64,
    rwl: f64,
    li: f64,
    risk_level: String,
    created_at: String,
}

impl From<Evaluation> for HistoryRow {
    fn from(e: Evaluation) -> Self {
        Self {
            id: e.id,
            name: e.name,
            weight: e.result.input.weight,
            rwl: e.result.rwl,
            li: e.result.li,
            risk_level: e.result.risk_level.to_string(),
            created_at: e.created_at.to_rfc3339(),
        }
    }
}

pub async fn handle(
    username: &str,
    config: &ErgoConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = bootstrap::open_service(config).await?;
    let user = bootstrap::require_user(&service, username).await?;

    let limit = flags.limit.unwrap_or(config.general.default_limit);
    let evaluations = service.list_evaluations(user.uid, limit).await?;
    let rows: Vec<HistoryRow> = evaluations.into_iter().map(HistoryRow::from).collect();

    output::output(&rows, flags.format)
}
