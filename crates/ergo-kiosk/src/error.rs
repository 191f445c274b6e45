//! Error types for kiosk arbitration.

use thiserror::Error;

/// Errors surfaced by the arbitrator.
///
/// Arbitration itself never fails — a conflicting online user is resolved
/// deterministically by the forced-logout transition. The only failure mode
/// is the persistence gateway, and the caller's contract is to abandon the
/// whole operation when that happens.
#[derive(Debug, Error)]
pub enum KioskError {
    /// The persistence gateway failed mid-operation.
    #[error("presence gateway failure: {0}")]
    Gateway(#[from] anyhow::Error),
}
