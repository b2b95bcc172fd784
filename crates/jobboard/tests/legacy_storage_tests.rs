//! Databases written before the current schema keep working.

mod common;

use rusqlite::Connection;
use tempfile::TempDir;

use jobboard::jobs::{JobQuery, JobStatus};
use jobboard::stats::job_type_display;
use jobboard::{Database, JobService};

/// Creates the schema the first deployment shipped: no `job_name`,
/// no `job_title`, and no migration tracking.
fn legacy_database(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("legacy.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE clients (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT UNIQUE NOT NULL);
         CREATE TABLE employees (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT UNIQUE NOT NULL);
         CREATE TABLE jobs (
             id INTEGER PRIMARY KEY AUTOINCREMENT,
             client TEXT NOT NULL,
             assigned_to TEXT NOT NULL,
             category TEXT NOT NULL,
             job_type TEXT,
             delivery_date TEXT NOT NULL,
             status TEXT DEFAULT 'pending',
             completion_status TEXT,
             led_deliverables TEXT,
             description TEXT,
             created_at TEXT,
             updated_at TEXT
         );
         INSERT INTO clients (name) VALUES ('stc');
         INSERT INTO jobs (client, assigned_to, category, job_type, delivery_date, status,
                           led_deliverables, created_at, updated_at)
         VALUES ('stc', 'Mijoy', 'current job', 'SM, LED', '2025-05-01 10:00:00', NULL,
                 '[\"Gate screen\"]', '2025-04-01 08:00:00', '2025-04-01 08:00:00');",
    )
    .unwrap();
    path
}

#[test]
fn test_legacy_rows_survive_migration() {
    let dir = TempDir::new().unwrap();
    let path = legacy_database(&dir);

    let db = Database::open(&path).unwrap();
    let jobs = JobService::new(db.clone());

    let all = jobs.list_jobs(&JobQuery::default()).unwrap();
    assert_eq!(all.len(), 1);
    let job = &all[0];
    assert_eq!(job.job_name, "Untitled Job");
    assert_eq!(job.job_type, vec!["SM", "LED"]);
    assert_eq!(job_type_display(job), "SM, LED");
    assert_eq!(job.status, JobStatus::Pending);
    assert_eq!(job.led_deliverables, vec!["Gate screen"]);
    assert_eq!(job.delivery_date.to_rfc3339(), "2025-05-01T10:00:00+00:00");
}

#[test]
fn test_legacy_day_filter_uses_date_prefix() {
    let dir = TempDir::new().unwrap();
    let db = Database::open(&legacy_database(&dir)).unwrap();
    let jobs = JobService::new(db);

    let day = chrono::NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
    assert_eq!(jobs.list_jobs(&JobQuery::for_day(day)).unwrap().len(), 1);
}

#[test]
fn test_migrating_twice_is_a_noop() {
    let dir = TempDir::new().unwrap();
    let path = legacy_database(&dir);

    Database::open(&path).unwrap();
    let db = Database::open(&path).unwrap();

    let (migrations, jobs): (u32, u32) = db
        .with_conn(|conn| {
            let migrations = conn.query_row("SELECT COUNT(*) FROM _migrations", [], |r| r.get(0))?;
            let jobs = conn.query_row("SELECT COUNT(*) FROM jobs", [], |r| r.get(0))?;
            Ok((migrations, jobs))
        })
        .unwrap();
    assert_eq!(migrations, 4);
    assert_eq!(jobs, 1);
}

#[test]
fn test_new_jobs_write_alongside_legacy_rows() {
    let dir = TempDir::new().unwrap();
    let db = Database::open(&legacy_database(&dir)).unwrap();
    let jobs = JobService::new(db);

    let created = common::JobBuilder::new("stc", "Sajid")
        .name("Summer promo")
        .delivered("2025-04-15")
        .create(&jobs);

    let all = jobs.list_jobs(&JobQuery::for_client("stc")).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, created.id);
}

#[test]
fn test_legacy_rows_without_timestamps_still_list() {
    let dir = TempDir::new().unwrap();
    let path = legacy_database(&dir);
    Connection::open(&path)
        .unwrap()
        .execute(
            "INSERT INTO jobs (client, assigned_to, category, delivery_date)
             VALUES ('stc', 'Sajid', 'pending jobs', '2025-05-02 09:00:00')",
            [],
        )
        .unwrap();

    let jobs = JobService::new(Database::open(&path).unwrap());
    let all = jobs.list_jobs(&JobQuery::default()).unwrap();
    assert_eq!(all.len(), 2);

    let undated = &all[1];
    assert_eq!(undated.assigned_to, "Sajid");
    assert!(undated.created_at.timestamp() > 0);
    assert!(jobs.get_job(undated.id).is_ok());
}

#[test]
fn test_legacy_and_new_rows_sort_chronologically_within_a_day() {
    let dir = TempDir::new().unwrap();
    let jobs = JobService::new(Database::open(&legacy_database(&dir)).unwrap());

    // The legacy row is stored as "2025-05-01 10:00:00".
    common::JobBuilder::new("stc", "Sajid")
        .delivered("2025-05-01T09:00:00Z")
        .create(&jobs);

    let delivered: Vec<String> = jobs
        .list_jobs(&JobQuery::default())
        .unwrap()
        .iter()
        .map(|j| j.delivery_date.to_rfc3339())
        .collect();
    assert_eq!(
        delivered,
        vec!["2025-05-01T09:00:00+00:00", "2025-05-01T10:00:00+00:00"]
    );
}
