//! Evaluation repository.
//!
//! Persists engine results keyed by user and creation time. The stored row
//! is the flattened `AssessmentResult`, so history listings reproduce
//! exactly what the engine computed.

use chrono::Utc;

use ergo_core::entities::{
    AssessmentInput, AssessmentResult, Evaluation, MultiplierSet,
};
use ergo_core::ids::PREFIX_EVALUATION;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum};
use crate::service::ErgoService;

const EVALUATION_COLUMNS: &str = "id, uid, name, weight, horizontal_distance, vertical_height, \
     distance_moved, asymmetric_angle, frequency, duration, grip_quality, \
     hm, vm, dm, am, fm, cm, rwl, li, risk_level, risk_description, created_at";

fn evaluation_from_row(row: &libsql::Row) -> Result<Evaluation, DatabaseError> {
    Ok(Evaluation {
        id: row.get::<String>(0)?,
        uid: row.get::<i64>(1)?,
        name: get_opt_string(row, 2)?,
        result: AssessmentResult {
            input: AssessmentInput {
                weight: row.get::<f64>(3)?,
                horizontal_distance: row.get::<f64>(4)?,
                vertical_height: row.get::<f64>(5)?,
                distance_moved: row.get::<f64>(6)?,
                asymmetric_angle: row.get::<f64>(7)?,
                frequency: row.get::<f64>(8)?,
                duration: parse_enum(&row.get::<String>(9)?)?,
                grip_quality: parse_enum(&row.get::<String>(10)?)?,
            },
            multipliers: MultiplierSet {
                hm: row.get::<f64>(11)?,
                vm: row.get::<f64>(12)?,
                dm: row.get::<f64>(13)?,
                am: row.get::<f64>(14)?,
                fm: row.get::<f64>(15)?,
                cm: row.get::<f64>(16)?,
            },
            rwl: row.get::<f64>(17)?,
            li: row.get::<f64>(18)?,
            risk_level: parse_enum(&row.get::<String>(19)?)?,
            risk_description: row.get::<String>(20)?,
        },
        created_at: parse_datetime(&row.get::<String>(21)?)?,
    })
}

impl ErgoService {
    /// Persist an engine result for a user, stamped now.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails.
    pub async fn insert_evaluation(
        &self,
        uid: i64,
        name: Option<&str>,
        result: &AssessmentResult,
    ) -> Result<Evaluation, DatabaseError> {
        let id = self.db().generate_id(PREFIX_EVALUATION).await?;
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "INSERT INTO evaluations (id, uid, name, weight, horizontal_distance,
                     vertical_height, distance_moved, asymmetric_angle, frequency,
                     duration, grip_quality, hm, vm, dm, am, fm, cm, rwl, li,
                     risk_level, risk_description, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13,
                     ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22)",
                libsql::params![
                    id.as_str(),
                    uid,
                    name,
                    result.input.weight,
                    result.input.horizontal_distance,
                    result.input.vertical_height,
                    result.input.distance_moved,
                    result.input.asymmetric_angle,
                    result.input.frequency,
                    result.input.duration.as_str(),
                    result.input.grip_quality.as_str(),
                    result.multipliers.hm,
                    result.multipliers.vm,
                    result.multipliers.dm,
                    result.multipliers.am,
                    result.multipliers.fm,
                    result.multipliers.cm,
                    result.rwl,
                    result.li,
                    result.risk_level.as_str(),
                    result.risk_description.as_str(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Evaluation {
            id,
            uid,
            name: name.map(ToString::to_string),
            result: result.clone(),
            created_at: now,
        })
    }

    /// List a user's evaluations, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_evaluations(
        &self,
        uid: i64,
        limit: u32,
    ) -> Result<Vec<Evaluation>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {EVALUATION_COLUMNS} FROM evaluations
                     WHERE uid = ?1 ORDER BY created_at DESC LIMIT ?2"
                ),
                libsql::params![uid, limit],
            )
            .await?;

        let mut evaluations = Vec::new();
        while let Some(row) = rows.next().await? {
            evaluations.push(evaluation_from_row(&row)?);
        }
        Ok(evaluations)
    }

    /// Fetch one evaluation by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no row matches.
    pub async fn get_evaluation(&self, id: &str) -> Result<Evaluation, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {EVALUATION_COLUMNS} FROM evaluations WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        evaluation_from_row(&row)
    }
}
