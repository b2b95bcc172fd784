//! Dashboard aggregates computed over an in-memory job set.
//!
//! Nothing here touches storage. Every counter has a matching
//! [`JobBucket`] so a drill-down list always agrees with its card.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::JobboardError;
use crate::jobs::model::{split_legacy, Job, JobStatus};

/// Headline counters for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStatusStats {
    pub total: usize,
    pub current: usize,
    pub upcoming: usize,
    pub pending: usize,
    pub completed: usize,
}

/// Per-employee counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeStats {
    pub total: usize,
    pub current: usize,
    pub pending: usize,
    pub completed: usize,
}

/// Per-client counters. `pending` here is status-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientStats {
    pub total: usize,
    pub pending: usize,
}

pub fn stats_by_category_and_status(jobs: &[Job]) -> CategoryStatusStats {
    jobs.iter().fold(
        CategoryStatusStats {
            total: jobs.len(),
            ..Default::default()
        },
        |mut stats, job| {
            stats.current += usize::from(job.is_current());
            stats.upcoming += usize::from(job.is_upcoming());
            stats.pending += usize::from(job.counts_as_pending());
            stats.completed += usize::from(job.is_completed());
            stats
        },
    )
}

/// Counters for every employee in `employees`, including those with no jobs.
/// Jobs assigned to anyone else are ignored.
pub fn stats_by_employee(jobs: &[Job], employees: &[String]) -> BTreeMap<String, EmployeeStats> {
    let mut by_employee: BTreeMap<String, EmployeeStats> = employees
        .iter()
        .map(|name| (name.clone(), EmployeeStats::default()))
        .collect();

    for job in jobs {
        if let Some(stats) = by_employee.get_mut(&job.assigned_to) {
            stats.total += 1;
            stats.current += usize::from(job.is_current());
            stats.pending += usize::from(job.counts_as_pending());
            stats.completed += usize::from(job.is_completed());
        }
    }
    by_employee
}

/// Counters for every client in `clients`, including those with no jobs.
pub fn stats_by_client(jobs: &[Job], clients: &[String]) -> BTreeMap<String, ClientStats> {
    let mut by_client: BTreeMap<String, ClientStats> = clients
        .iter()
        .map(|name| (name.clone(), ClientStats::default()))
        .collect();

    for job in jobs {
        if let Some(stats) = by_client.get_mut(&job.client) {
            stats.total += 1;
            stats.pending += usize::from(job.status == JobStatus::Pending);
        }
    }
    by_client
}

/// The job's types with any comma-joined legacy entries split apart.
pub fn expand_job_types(job: &Job) -> Vec<String> {
    job.job_type.iter().flat_map(|t| split_legacy(t)).collect()
}

/// Job types as one display string, e.g. `"SM, LED"`.
pub fn job_type_display(job: &Job) -> String {
    expand_job_types(job).join(", ")
}

pub fn has_led(job: &Job) -> bool {
    expand_job_types(job).iter().any(|t| t == "LED")
}

/// A dashboard drill-down list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobBucket {
    All,
    Current,
    Upcoming,
    Pending,
    Completed,
}

impl JobBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobBucket::All => "all",
            JobBucket::Current => "current",
            JobBucket::Upcoming => "upcoming",
            JobBucket::Pending => "pending",
            JobBucket::Completed => "completed",
        }
    }

    pub fn contains(&self, job: &Job) -> bool {
        match self {
            JobBucket::All => true,
            JobBucket::Current => job.is_current(),
            JobBucket::Upcoming => job.is_upcoming(),
            JobBucket::Pending => job.counts_as_pending(),
            JobBucket::Completed => job.is_completed(),
        }
    }

    /// The counter in [`CategoryStatusStats`] this bucket lists.
    pub fn count_in(&self, stats: &CategoryStatusStats) -> usize {
        match self {
            JobBucket::All => stats.total,
            JobBucket::Current => stats.current,
            JobBucket::Upcoming => stats.upcoming,
            JobBucket::Pending => stats.pending,
            JobBucket::Completed => stats.completed,
        }
    }
}

impl FromStr for JobBucket {
    type Err = JobboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(JobBucket::All),
            "current" => Ok(JobBucket::Current),
            "upcoming" => Ok(JobBucket::Upcoming),
            "pending" => Ok(JobBucket::Pending),
            "completed" => Ok(JobBucket::Completed),
            other => Err(JobboardError::validation(format!(
                "Unknown job bucket: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for JobBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Jobs in `bucket`, in their original order.
pub fn filter_by_bucket(jobs: &[Job], bucket: JobBucket) -> Vec<Job> {
    jobs.iter().filter(|job| bucket.contains(job)).cloned().collect()
}
