use chrono::{NaiveDate, Utc};

use super::model::Job;
use super::payload::JobPayload;
use crate::dates::format_day;
use crate::db::job_repo::{self, JobFilter};
use crate::db::Database;
use crate::error::{JobboardError, Result};

const JOB_NOT_FOUND: &str = "Job not found";

/// Filters for [`JobService::list_jobs`]. Set fields combine by intersection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobQuery {
    /// Exact client name. An empty string means no filter.
    pub client: Option<String>,
    /// Calendar day the delivery falls on.
    pub date: Option<NaiveDate>,
    pub assigned_to: Option<String>,
    /// Inclusive day range.
    pub delivered_from: Option<NaiveDate>,
    pub delivered_to: Option<NaiveDate>,
}

impl JobQuery {
    pub fn for_client(client: impl Into<String>) -> Self {
        Self {
            client: Some(client.into()),
            ..Default::default()
        }
    }

    pub fn for_day(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Default::default()
        }
    }

    pub fn for_employee(name: impl Into<String>) -> Self {
        Self {
            assigned_to: Some(name.into()),
            ..Default::default()
        }
    }

    fn to_filter(&self) -> JobFilter {
        JobFilter {
            client: self.client.clone().filter(|c| !c.is_empty()),
            assigned_to: self.assigned_to.clone().filter(|a| !a.is_empty()),
            delivery_day: self.date.map(format_day),
            delivered_from: self.delivered_from.map(format_day),
            delivered_to: self.delivered_to.map(format_day),
        }
    }
}

/// Reads and writes jobs. Every stored row leaves this service as a [`Job`].
#[derive(Clone)]
pub struct JobService {
    db: Database,
}

impl JobService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Jobs matching `query`, earliest delivery first.
    pub fn list_jobs(&self, query: &JobQuery) -> Result<Vec<Job>> {
        let _span = tracing::info_span!(
            "list_jobs",
            client = ?query.client,
            date = ?query.date,
            assigned_to = ?query.assigned_to
        )
        .entered();

        let rows = job_repo::query(&self.db, &query.to_filter())?;
        log::debug!("Query matched {} jobs", rows.len());
        Ok(rows.into_iter().map(Job::from_row).collect())
    }

    pub fn get_job(&self, id: i64) -> Result<Job> {
        job_repo::find_by_id(&self.db, id)?
            .map(Job::from_row)
            .ok_or_else(|| JobboardError::NotFound(JOB_NOT_FOUND.to_string()))
    }

    /// Normalizes `payload`, stores it, and returns the stored job.
    pub fn create_job(&self, payload: JobPayload) -> Result<Job> {
        let _span = tracing::info_span!("create_job").entered();

        let now = Utc::now();
        let job = payload.normalize(now)?;
        let id = job_repo::insert(&self.db, &job.to_record(now)?)?;
        log::info!(
            "Created job {} for client '{}' assigned to '{}'",
            id,
            job.client,
            job.assigned_to
        );

        self.get_job(id)
    }

    /// Replaces every mutable field of job `id`. `created_at` is kept.
    pub fn update_job(&self, id: i64, payload: JobPayload) -> Result<Job> {
        let _span = tracing::info_span!("update_job", id).entered();

        let now = Utc::now();
        let job = payload.normalize(now)?;
        let affected = job_repo::update(&self.db, id, &job.to_record(now)?)?;
        if affected == 0 {
            return Err(JobboardError::NotFound(JOB_NOT_FOUND.to_string()));
        }
        log::info!("Updated job {}", id);

        self.get_job(id)
    }

    pub fn delete_job(&self, id: i64) -> Result<()> {
        let _span = tracing::info_span!("delete_job", id).entered();

        if job_repo::delete(&self.db, id)? == 0 {
            return Err(JobboardError::NotFound(JOB_NOT_FOUND.to_string()));
        }
        log::info!("Deleted job {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::model::{JobCategory, JobStatus};
    use crate::jobs::payload::JobTypeInput;

    fn service() -> JobService {
        JobService::new(Database::open_in_memory().expect("Failed to create test database"))
    }

    fn payload(client: &str, delivery: &str) -> JobPayload {
        JobPayload {
            client: Some(client.to_string()),
            assigned_to: Some("Mijoy".to_string()),
            delivery_date: Some(delivery.to_string()),
            ..Default::default()
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_create_materializes_defaults() {
        let svc = service();
        let before = Utc::now();
        let job = svc
            .create_job(JobPayload {
                client: Some("stc".to_string()),
                assigned_to: Some("Sajid".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert!(job.id > 0);
        assert_eq!(job.job_type, vec!["SM"]);
        assert_eq!(job.job_name, "Untitled Job");
        assert_eq!(job.category, JobCategory::Current);
        assert_eq!(job.status, JobStatus::Pending);
        let drift = (job.delivery_date - before).num_seconds().abs();
        assert!(drift <= 5, "delivery date drifted {}s", drift);
        assert_eq!(job.created_at, job.updated_at);
    }

    #[test]
    fn test_create_rejects_missing_client() {
        let svc = service();
        let result = svc.create_job(JobPayload {
            assigned_to: Some("Mijoy".to_string()),
            ..Default::default()
        });
        assert!(matches!(result, Err(JobboardError::Validation(_))));
        assert!(svc.list_jobs(&JobQuery::default()).unwrap().is_empty());
    }

    #[test]
    fn test_get_missing_job() {
        let svc = service();
        assert!(matches!(svc.get_job(7), Err(JobboardError::NotFound(msg)) if msg == "Job not found"));
    }

    #[test]
    fn test_update_replaces_fields_and_keeps_created_at() {
        let svc = service();
        let created = svc.create_job(payload("stc", "2026-02-01T09:00:00Z")).unwrap();

        let mut change = payload("CBK", "2026-02-03T09:00:00Z");
        change.status = Some("completed".to_string());
        change.job_type = Some(JobTypeInput::Many(vec!["LED".to_string()]));
        let updated = svc.update_job(created.id, change).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.client, "CBK");
        assert_eq!(updated.status, JobStatus::Completed);
        assert_eq!(updated.job_type, vec!["LED"]);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn test_update_missing_job() {
        let svc = service();
        let result = svc.update_job(404, payload("stc", "2026-02-01"));
        assert!(matches!(result, Err(JobboardError::NotFound(_))));
    }

    #[test]
    fn test_delete_then_delete_again() {
        let svc = service();
        let job = svc.create_job(payload("stc", "2026-02-01")).unwrap();
        svc.delete_job(job.id).unwrap();
        assert!(matches!(svc.delete_job(job.id), Err(JobboardError::NotFound(_))));
    }

    #[test]
    fn test_list_filters_intersect() {
        let svc = service();
        svc.create_job(payload("stc", "2026-02-02T10:00:00Z")).unwrap();
        svc.create_job(payload("stc", "2026-02-01T10:00:00Z")).unwrap();
        svc.create_job(payload("CBK", "2026-02-01T08:00:00Z")).unwrap();

        let all = svc.list_jobs(&JobQuery::default()).unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].delivery_date <= w[1].delivery_date));

        let stc = svc.list_jobs(&JobQuery::for_client("stc")).unwrap();
        assert_eq!(stc.len(), 2);
        assert!(stc.iter().all(|j| j.client == "stc"));

        let first = svc.list_jobs(&JobQuery::for_day(day("2026-02-01"))).unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].client, "CBK");

        let both = svc
            .list_jobs(&JobQuery {
                client: Some("stc".to_string()),
                date: Some(day("2026-02-01")),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(both.len(), 1);
    }

    #[test]
    fn test_empty_client_means_no_filter() {
        let svc = service();
        svc.create_job(payload("stc", "2026-02-01")).unwrap();
        svc.create_job(payload("CBK", "2026-02-01")).unwrap();
        assert_eq!(svc.list_jobs(&JobQuery::for_client("")).unwrap().len(), 2);
    }

    #[test]
    fn test_ties_break_by_id() {
        let svc = service();
        let a = svc.create_job(payload("stc", "2026-02-01T09:00:00Z")).unwrap();
        let b = svc.create_job(payload("CBK", "2026-02-01T09:00:00Z")).unwrap();
        let ids: Vec<i64> = svc
            .list_jobs(&JobQuery::default())
            .unwrap()
            .iter()
            .map(|j| j.id)
            .collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }
}
