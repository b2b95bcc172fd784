//! Job creation, querying and mutation against a file database.

mod common;

use chrono::{NaiveDate, Utc};

use common::{JobBuilder, TestHarness};
use jobboard::jobs::{CompletionStatus, JobCategory, JobQuery, JobStatus};
use jobboard::JobboardError;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_created_job_gets_every_default() {
    let h = TestHarness::seeded();
    let before = Utc::now();

    let job = JobBuilder::new("stc", "Mijoy").create(&h.jobs);

    assert_eq!(job.job_type, vec!["SM"]);
    assert_eq!(job.job_name, "Untitled Job");
    assert_eq!(job.category, JobCategory::Current);
    assert_eq!(job.status, JobStatus::Pending);
    assert!(job.led_deliverables.is_empty());
    assert!((job.delivery_date - before).num_seconds().abs() <= 5);
}

#[test]
fn test_created_job_reads_back_identically() {
    let h = TestHarness::seeded();
    let job = JobBuilder::new("CBK", "Sajid")
        .name("Eid menu boards")
        .category("upcoming job")
        .status("in-progress")
        .completion("sample delivered")
        .types(&["LED", "Branches"])
        .led(&["Drive-thru 2x1", "Counter 4x1"])
        .delivered("2026-04-02T15:45")
        .create(&h.jobs);

    let fetched = h.jobs.get_job(job.id).unwrap();
    assert_eq!(fetched, job);
    assert_eq!(fetched.completion_status, Some(CompletionStatus::SampleDelivered));
    assert_eq!(fetched.delivery_date.to_rfc3339(), "2026-04-02T15:45:00+00:00");
}

#[test]
fn test_client_filter_is_exact_and_ordered() {
    let h = TestHarness::seeded();
    JobBuilder::new("BK", "Mijoy").delivered("2026-05-03").create(&h.jobs);
    JobBuilder::new("BK", "Mijoy").delivered("2026-05-01").create(&h.jobs);
    JobBuilder::new("bk", "Mijoy").delivered("2026-05-02").create(&h.jobs);
    JobBuilder::new("PH", "Sajid").delivered("2026-05-02").create(&h.jobs);

    let jobs = h.jobs.list_jobs(&JobQuery::for_client("BK")).unwrap();
    assert_eq!(jobs.len(), 2);
    assert!(jobs.iter().all(|j| j.client == "BK"));
    assert!(jobs
        .windows(2)
        .all(|w| w[0].delivery_date <= w[1].delivery_date));
}

#[test]
fn test_date_filter_matches_whole_day() {
    let h = TestHarness::seeded();
    JobBuilder::new("stc", "Mijoy").delivered("2026-05-01T00:00:00Z").create(&h.jobs);
    JobBuilder::new("stc", "Mijoy").delivered("2026-05-01T23:59:59Z").create(&h.jobs);
    JobBuilder::new("stc", "Mijoy").delivered("2026-05-02T00:00:00Z").create(&h.jobs);
    JobBuilder::new("stc", "Mijoy").delivered("2026-04-30T23:59:59Z").create(&h.jobs);

    let jobs = h.jobs.list_jobs(&JobQuery::for_day(day("2026-05-01"))).unwrap();
    assert_eq!(jobs.len(), 2);
    assert!(jobs
        .iter()
        .all(|j| j.delivery_date.date_naive() == day("2026-05-01")));
}

#[test]
fn test_employee_filter() {
    let h = TestHarness::seeded();
    JobBuilder::new("stc", "Mijoy").create(&h.jobs);
    JobBuilder::new("PH", "Sajid").create(&h.jobs);
    JobBuilder::new("BK", "Sajid").create(&h.jobs);

    let jobs = h.jobs.list_jobs(&JobQuery::for_employee("Sajid")).unwrap();
    assert_eq!(jobs.len(), 2);
    assert!(jobs.iter().all(|j| j.assigned_to == "Sajid"));
}

#[test]
fn test_update_normalizes_like_create() {
    let h = TestHarness::seeded();
    let job = JobBuilder::new("stc", "Mijoy")
        .name("Teaser")
        .types(&["TikTok"])
        .create(&h.jobs);

    let updated = h
        .jobs
        .update_job(job.id, JobBuilder::new("stc", "Sajid").build())
        .unwrap();

    assert_eq!(updated.assigned_to, "Sajid");
    assert_eq!(updated.job_name, "Untitled Job");
    assert_eq!(updated.job_type, vec!["SM"]);
    assert_eq!(updated.created_at, job.created_at);
}

#[test]
fn test_update_with_invalid_payload_changes_nothing() {
    let h = TestHarness::seeded();
    let job = JobBuilder::new("stc", "Mijoy").create(&h.jobs);

    let result = h
        .jobs
        .update_job(job.id, JobBuilder::new("stc", "Mijoy").status("archived").build());
    assert!(matches!(result, Err(JobboardError::Validation(_))));
    assert_eq!(h.jobs.get_job(job.id).unwrap(), job);
}

#[test]
fn test_delete_missing_job_mutates_nothing() {
    let h = TestHarness::seeded();
    JobBuilder::new("stc", "Mijoy").create(&h.jobs);
    JobBuilder::new("PH", "Sajid").create(&h.jobs);

    let result = h.jobs.delete_job(9999);
    assert!(matches!(result, Err(JobboardError::NotFound(_))));
    assert_eq!(h.jobs.list_jobs(&JobQuery::default()).unwrap().len(), 2);
}

#[test]
fn test_jobs_survive_reopen() {
    let h = TestHarness::seeded();
    let job = JobBuilder::new("Subway", "Mijoy").types(&["PMax"]).create(&h.jobs);

    let reopened = jobboard::JobService::new(h.reopen());
    assert_eq!(reopened.get_job(job.id).unwrap(), job);
}
