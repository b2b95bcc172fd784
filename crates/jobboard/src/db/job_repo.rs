//! Job repository: CRUD operations for the `jobs` table.
//!
//! Rows are exchanged in their persisted shape (text timestamps, JSON list
//! columns). Translation to the domain model happens in `jobs::model`.

use rusqlite::{params, Row};

use super::{Database, DatabaseError};

// Legacy rows may carry NULL timestamps; empty text falls through to the
// warn-and-default path in `jobs::model`.
const JOB_COLUMNS: &str = "id, client, assigned_to, category, job_title, job_name, job_type,
     COALESCE(delivery_date, '') AS delivery_date, status, completion_status,
     led_deliverables, description,
     COALESCE(created_at, '') AS created_at, COALESCE(updated_at, '') AS updated_at";

/// A raw job row from the database.
#[derive(Debug, Clone)]
pub struct JobRow {
    pub id: i64,
    pub client: String,
    pub assigned_to: String,
    pub category: String,
    pub job_title: Option<String>,
    pub job_name: Option<String>,
    pub job_type: Option<String>,
    pub delivery_date: String,
    pub status: Option<String>,
    pub completion_status: Option<String>,
    pub led_deliverables: Option<String>,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl JobRow {
    fn from_row(row: &Row<'_>) -> Result<Self, rusqlite::Error> {
        Ok(Self {
            id: row.get("id")?,
            client: row.get("client")?,
            assigned_to: row.get("assigned_to")?,
            category: row.get("category")?,
            job_title: row.get("job_title")?,
            job_name: row.get("job_name")?,
            job_type: row.get("job_type")?,
            delivery_date: row.get("delivery_date")?,
            status: row.get("status")?,
            completion_status: row.get("completion_status")?,
            led_deliverables: row.get("led_deliverables")?,
            description: row.get("description")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

/// Column values for an insert or a full update.
///
/// `timestamp` becomes `created_at` and `updated_at` on insert, and only
/// `updated_at` on update.
#[derive(Debug, Clone)]
pub struct JobRecord {
    pub client: String,
    pub assigned_to: String,
    pub category: String,
    pub job_title: Option<String>,
    pub job_name: String,
    pub job_type: String,
    pub delivery_date: String,
    pub status: String,
    pub completion_status: Option<String>,
    pub led_deliverables: String,
    pub description: Option<String>,
    pub timestamp: String,
}

/// Query filter parameters for job listing. All set fields must match.
#[derive(Debug, Default, Clone)]
pub struct JobFilter {
    pub client: Option<String>,
    pub assigned_to: Option<String>,
    /// Calendar day `YYYY-MM-DD` compared against the date part of `delivery_date`.
    pub delivery_day: Option<String>,
    /// Inclusive lower bound, `YYYY-MM-DD`.
    pub delivered_from: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`.
    pub delivered_to: Option<String>,
}

/// Inserts a new job row and returns its generated id.
pub fn insert(db: &Database, job: &JobRecord) -> Result<i64, DatabaseError> {
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO jobs (client, assigned_to, category, job_title, job_name, job_type,
             delivery_date, status, completion_status, led_deliverables, description,
             created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?12)",
            params![
                job.client,
                job.assigned_to,
                job.category,
                job.job_title,
                job.job_name,
                job.job_type,
                job.delivery_date,
                job.status,
                job.completion_status,
                job.led_deliverables,
                job.description,
                job.timestamp,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    })
}

/// Overwrites every mutable column of a job. Returns the number of rows
/// affected (0 when the id does not exist).
pub fn update(db: &Database, id: i64, job: &JobRecord) -> Result<usize, DatabaseError> {
    db.with_conn(|conn| {
        let affected = conn.execute(
            "UPDATE jobs SET client=?2, assigned_to=?3, category=?4, job_title=?5,
             job_name=?6, job_type=?7, delivery_date=?8, status=?9,
             completion_status=?10, led_deliverables=?11, description=?12, updated_at=?13
             WHERE id=?1",
            params![
                id,
                job.client,
                job.assigned_to,
                job.category,
                job.job_title,
                job.job_name,
                job.job_type,
                job.delivery_date,
                job.status,
                job.completion_status,
                job.led_deliverables,
                job.description,
                job.timestamp,
            ],
        )?;
        Ok(affected)
    })
}

/// Deletes a job. Returns the number of rows removed.
pub fn delete(db: &Database, id: i64) -> Result<usize, DatabaseError> {
    db.with_conn(|conn| {
        let affected = conn.execute("DELETE FROM jobs WHERE id = ?1", params![id])?;
        Ok(affected)
    })
}

/// Finds a job by its ID.
pub fn find_by_id(db: &Database, id: i64) -> Result<Option<JobRow>, DatabaseError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(&format!("SELECT {} FROM jobs WHERE id = ?1", JOB_COLUMNS))?;
        let mut rows = stmt.query_map(params![id], JobRow::from_row)?;
        match rows.next() {
            Some(Ok(row)) => Ok(Some(row)),
            Some(Err(e)) => Err(DatabaseError::Sqlite(e)),
            None => Ok(None),
        }
    })
}

/// Queries jobs matching every set filter, earliest delivery first.
///
/// Ordering goes through `julianday` so legacy `YYYY-MM-DD HH:MM:SS` rows
/// interleave correctly with RFC3339 ones.
pub fn query(db: &Database, filter: &JobFilter) -> Result<Vec<JobRow>, DatabaseError> {
    db.with_conn(|conn| {
        let mut conditions = Vec::new();
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

        if let Some(ref client) = filter.client {
            conditions.push(format!("client = ?{}", param_values.len() + 1));
            param_values.push(Box::new(client.clone()));
        }
        if let Some(ref assigned_to) = filter.assigned_to {
            conditions.push(format!("assigned_to = ?{}", param_values.len() + 1));
            param_values.push(Box::new(assigned_to.clone()));
        }
        if let Some(ref day) = filter.delivery_day {
            conditions.push(format!(
                "substr(delivery_date, 1, 10) = ?{}",
                param_values.len() + 1
            ));
            param_values.push(Box::new(day.clone()));
        }
        if let Some(ref from) = filter.delivered_from {
            conditions.push(format!(
                "substr(delivery_date, 1, 10) >= ?{}",
                param_values.len() + 1
            ));
            param_values.push(Box::new(from.clone()));
        }
        if let Some(ref to) = filter.delivered_to {
            conditions.push(format!(
                "substr(delivery_date, 1, 10) <= ?{}",
                param_values.len() + 1
            ));
            param_values.push(Box::new(to.clone()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "SELECT {} FROM jobs {} ORDER BY julianday(delivery_date) ASC, id ASC",
            JOB_COLUMNS, where_clause
        );

        let params_ref: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let mut stmt = conn.prepare(&sql)?;
        let rows: Vec<JobRow> = stmt
            .query_map(params_ref.as_slice(), JobRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    })
}
