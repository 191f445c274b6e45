//! Cross-cutting error types for Ergo.
//!
//! Domain-specific errors (`DatabaseError`, `KioskError`, `ConfigError`) are
//! defined in their respective crates; the CLI converges everything into
//! `anyhow`. This module holds only the errors that can originate from any
//! crate in the system.

use thiserror::Error;

/// Errors that can be raised by any Ergo crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (range, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
