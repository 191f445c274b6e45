//! # ergo-db
//!
//! libSQL database operations for Ergo state management.
//!
//! Handles all relational state: the users table (presence flags only —
//! credential storage is out of scope), the append-only access log, and
//! persisted risk evaluations. Also binds the kiosk arbitrator to storage
//! by implementing its `PresenceGateway` contract for [`service::ErgoService`].

pub mod error;
pub mod helpers;
mod kiosk_gateway;
mod migrations;
pub mod repos;
pub mod service;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all Ergo state operations.
///
/// Wraps a libSQL database and connection; repository methods live on
/// [`service::ErgoService`].
pub struct ErgoDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl ErgoDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open; all DDL is `IF NOT EXISTS`,
    /// so re-opening an existing file is idempotent.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let ergo_db = Self { db, conn };
        ergo_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(ergo_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"eva-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    async fn test_db() -> ErgoDb {
        ErgoDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let mut rows = db
            .conn()
            .query(
                "SELECT name FROM sqlite_master WHERE type = 'table'
                 AND name IN ('users', 'access_log', 'evaluations')",
                (),
            )
            .await
            .unwrap();

        let mut tables = HashSet::new();
        while let Some(row) = rows.next().await.unwrap() {
            tables.insert(row.get::<String>(0).unwrap());
        }
        assert_eq!(tables.len(), 3);
    }

    #[tokio::test]
    async fn generate_id_has_prefix_and_hex_suffix() {
        let db = test_db().await;
        let id = db.generate_id(ergo_core::ids::PREFIX_EVALUATION).await.unwrap();

        assert!(id.starts_with("eva-"));
        assert_eq!(id.len(), 12);
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn migrations_are_idempotent_on_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ergo.db");
        let path = path.to_str().unwrap();

        {
            let db = ErgoDb::open_local(path).await.unwrap();
            db.conn()
                .execute("INSERT INTO users (username) VALUES ('mrossi')", ())
                .await
                .unwrap();
        }

        // Second open re-runs the embedded migrations over existing tables.
        let db = ErgoDb::open_local(path).await.unwrap();
        let mut rows = db
            .conn()
            .query("SELECT COUNT(*) FROM users", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }
}
