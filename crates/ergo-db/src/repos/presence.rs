//! Users and presence repository.
//!
//! The users table carries no credentials — provisioning here is a name
//! reservation, and the online/heartbeat columns are the kiosk's single
//! online-user row.

use chrono::{DateTime, Utc};

use ergo_core::entities::UserPresence;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_optional_datetime};
use crate::service::ErgoService;

fn presence_from_row(row: &libsql::Row) -> Result<UserPresence, DatabaseError> {
    Ok(UserPresence {
        uid: row.get::<i64>(0)?,
        username: row.get::<String>(1)?,
        online: row.get::<i64>(2)? != 0,
        last_heartbeat: parse_optional_datetime(get_opt_string(row, 3)?.as_deref())?,
    })
}

const PRESENCE_COLUMNS: &str = "uid, username, online, last_heartbeat";

impl ErgoService {
    /// Create a user. Usernames are unique.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails (including a duplicate
    /// username).
    pub async fn create_user(&self, username: &str) -> Result<UserPresence, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "INSERT INTO users (username) VALUES (?1) RETURNING {PRESENCE_COLUMNS}"
                ),
                libsql::params![username],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        presence_from_row(&row)
    }

    /// Look up a user by name.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_user_by_name(
        &self,
        username: &str,
    ) -> Result<Option<UserPresence>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {PRESENCE_COLUMNS} FROM users WHERE username = ?1"),
                libsql::params![username],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(presence_from_row(&row)?)),
            None => Ok(None),
        }
    }

    /// Look up a user by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_user(&self, uid: i64) -> Result<Option<UserPresence>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {PRESENCE_COLUMNS} FROM users WHERE uid = ?1"),
                libsql::params![uid],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(presence_from_row(&row)?)),
            None => Ok(None),
        }
    }

    /// The user currently online at the kiosk, if any. At most one row can
    /// match while every writer goes through the arbitrator.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn online_user(&self) -> Result<Option<UserPresence>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {PRESENCE_COLUMNS} FROM users WHERE online = 1 LIMIT 1"),
                (),
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(presence_from_row(&row)?)),
            None => Ok(None),
        }
    }

    /// Mark a user online with `at` as their first heartbeat.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the UPDATE fails.
    pub async fn mark_online(&self, uid: i64, at: DateTime<Utc>) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                "UPDATE users SET online = 1, last_heartbeat = ?1 WHERE uid = ?2",
                libsql::params![at.to_rfc3339(), uid],
            )
            .await?;
        Ok(())
    }

    /// Clear the online flag and heartbeat together, preserving the
    /// presence invariant.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the UPDATE fails.
    pub async fn mark_offline(&self, uid: i64) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                "UPDATE users SET online = 0, last_heartbeat = NULL WHERE uid = ?1",
                libsql::params![uid],
            )
            .await?;
        Ok(())
    }

    /// Refresh the heartbeat of an online user. The `online = 1` condition
    /// keeps a late heartbeat from resurrecting a row a forced logout just
    /// cleared.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the UPDATE fails.
    pub async fn record_heartbeat(&self, uid: i64, at: DateTime<Utc>) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                "UPDATE users SET last_heartbeat = ?1 WHERE uid = ?2 AND online = 1",
                libsql::params![at.to_rfc3339(), uid],
            )
            .await?;
        Ok(())
    }
}
