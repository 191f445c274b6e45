//! Service layer hosting the repository methods.
//!
//! `ErgoService` wraps [`ErgoDb`] (raw database access). All repo methods
//! are implemented as `impl ErgoService` in `repos/`, and the kiosk
//! arbitrator's `PresenceGateway` contract is implemented on this type too,
//! so one service value serves both the CLI queries and the arbitrator.

use crate::ErgoDb;
use crate::error::DatabaseError;

/// Orchestrates database reads and writes for users, the access log, and
/// evaluations.
pub struct ErgoService {
    db: ErgoDb,
}

impl ErgoService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` — Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = ErgoDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `ErgoDb` (for testing).
    #[must_use]
    pub const fn from_db(db: ErgoDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &ErgoDb {
        &self.db
    }
}
