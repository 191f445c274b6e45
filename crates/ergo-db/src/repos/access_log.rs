//! Access-log repository.
//!
//! Append-only entries recording every login and logout, forced logouts
//! included. Supports dynamic filtering.

use chrono::Utc;

use ergo_core::entities::AccessLogEntry;
use ergo_core::enums::AccessAction;
use ergo_core::ids::PREFIX_ACCESS;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum};
use crate::service::ErgoService;

/// Filter criteria for access-log queries.
#[derive(Debug, Default)]
pub struct AccessLogFilter {
    pub uid: Option<i64>,
    pub action: Option<AccessAction>,
    pub kiosk_only: bool,
    pub limit: Option<u32>,
}

impl ErgoService {
    /// Append an access-log entry, stamped now. Called on every login and
    /// logout transition.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails.
    pub async fn append_access(
        &self,
        uid: i64,
        action: AccessAction,
        is_kiosk: bool,
    ) -> Result<AccessLogEntry, DatabaseError> {
        let id = self.db().generate_id(PREFIX_ACCESS).await?;
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "INSERT INTO access_log (id, uid, action, is_kiosk, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    id.as_str(),
                    uid,
                    action.as_str(),
                    i64::from(is_kiosk),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(AccessLogEntry {
            id,
            uid,
            action,
            is_kiosk,
            created_at: now,
        })
    }

    /// Query access-log entries with optional filters, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn query_access(
        &self,
        filter: &AccessLogFilter,
    ) -> Result<Vec<AccessLogEntry>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(uid) = filter.uid {
            params.push(libsql::Value::Integer(uid));
            conditions.push(format!("uid = ?{}", params.len()));
        }
        if let Some(action) = filter.action {
            params.push(libsql::Value::Text(action.as_str().to_string()));
            conditions.push(format!("action = ?{}", params.len()));
        }
        if filter.kiosk_only {
            conditions.push("is_kiosk = 1".to_string());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let limit = filter.limit.unwrap_or(100);
        let sql = format!(
            "SELECT id, uid, action, is_kiosk, created_at
             FROM access_log {where_clause}
             ORDER BY created_at DESC LIMIT {limit}"
        );

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut entries = Vec::new();

        while let Some(row) = rows.next().await? {
            entries.push(AccessLogEntry {
                id: row.get::<String>(0)?,
                uid: row.get::<i64>(1)?,
                action: parse_enum(&row.get::<String>(2)?)?,
                is_kiosk: row.get::<i64>(3)? != 0,
                created_at: parse_datetime(&row.get::<String>(4)?)?,
            });
        }

        Ok(entries)
    }
}
