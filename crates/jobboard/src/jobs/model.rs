//! Canonical in-memory job shape and its enumerations.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dates::parse_stored_timestamp;
use crate::db::job_repo::JobRow;
use crate::error::JobboardError;

/// Job type stored when the caller supplies none.
pub const DEFAULT_JOB_TYPE: &str = "SM";
/// Job name stored when the caller supplies none.
pub const DEFAULT_JOB_NAME: &str = "Untitled Job";
/// The job types offered by the dashboard. Not enforced.
pub const KNOWN_JOB_TYPES: &[&str] = &["SM", "LED", "PMax", "Branches", "TikTok", "3D Visual"];

/// Which board column a job sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JobCategory {
    #[default]
    #[serde(rename = "current job")]
    Current,
    #[serde(rename = "upcoming job")]
    Upcoming,
    #[serde(rename = "pending jobs")]
    Pending,
}

impl JobCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobCategory::Current => "current job",
            JobCategory::Upcoming => "upcoming job",
            JobCategory::Pending => "pending jobs",
        }
    }
}

impl FromStr for JobCategory {
    type Err = JobboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "current job" => Ok(JobCategory::Current),
            "upcoming job" => Ok(JobCategory::Upcoming),
            "pending jobs" => Ok(JobCategory::Pending),
            other => Err(JobboardError::validation(format!(
                "Unknown category: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Work progress of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::InProgress => "in-progress",
            JobStatus::Completed => "completed",
        }
    }
}

impl FromStr for JobStatus {
    type Err = JobboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(JobStatus::Pending),
            "in-progress" => Ok(JobStatus::InProgress),
            "completed" => Ok(JobStatus::Completed),
            other => Err(JobboardError::validation(format!("Unknown status: {}", other))),
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a completed job was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompletionStatus {
    #[serde(rename = "sample delivered")]
    SampleDelivered,
    #[serde(rename = "rollout")]
    Rollout,
}

impl CompletionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionStatus::SampleDelivered => "sample delivered",
            CompletionStatus::Rollout => "rollout",
        }
    }
}

impl FromStr for CompletionStatus {
    type Err = JobboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sample delivered" => Ok(CompletionStatus::SampleDelivered),
            "rollout" => Ok(CompletionStatus::Rollout),
            other => Err(JobboardError::validation(format!(
                "Unknown completion status: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A job as the rest of the application sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub client: String,
    pub assigned_to: String,
    pub category: JobCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    pub job_name: String,
    pub job_type: Vec<String>,
    pub delivery_date: DateTime<Utc>,
    pub status: JobStatus,
    #[serde(default)]
    pub completion_status: Option<CompletionStatus>,
    #[serde(default)]
    pub led_deliverables: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Translates a persisted row into the canonical shape.
    ///
    /// Never fails: unknown enum text and unreadable timestamps are logged
    /// and replaced with defaults.
    pub fn from_row(row: JobRow) -> Self {
        let id = row.id;

        let category = row.category.parse().unwrap_or_else(|_| {
            log::warn!(
                "Unknown job category '{}' for job {}, defaulting to '{}'",
                row.category,
                id,
                JobCategory::default()
            );
            JobCategory::default()
        });

        let status = match row.status.as_deref() {
            None | Some("") => JobStatus::default(),
            Some(s) => s.parse().unwrap_or_else(|_| {
                log::warn!(
                    "Unknown job status '{}' for job {}, defaulting to '{}'",
                    s,
                    id,
                    JobStatus::default()
                );
                JobStatus::default()
            }),
        };

        let completion_status = match row.completion_status.as_deref() {
            None | Some("") => None,
            Some(s) => match s.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    log::warn!("Dropping unknown completion status '{}' for job {}", s, id);
                    None
                }
            },
        };

        Self {
            id,
            client: row.client,
            assigned_to: row.assigned_to,
            category,
            job_title: row.job_title.filter(|t| !t.is_empty()),
            job_name: row
                .job_name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| DEFAULT_JOB_NAME.to_string()),
            job_type: decode_job_type(row.job_type.as_deref()),
            delivery_date: parse_stored_timestamp(&row.delivery_date, id),
            status,
            completion_status,
            led_deliverables: decode_list(row.led_deliverables.as_deref(), id),
            description: row.description.filter(|d| !d.is_empty()),
            created_at: parse_stored_timestamp(&row.created_at, id),
            updated_at: parse_stored_timestamp(&row.updated_at, id),
        }
    }

    pub fn is_current(&self) -> bool {
        self.category == JobCategory::Current
    }

    pub fn is_upcoming(&self) -> bool {
        self.category == JobCategory::Upcoming
    }

    /// Pending on the dashboard: parked in the pending column OR not started.
    pub fn counts_as_pending(&self) -> bool {
        self.category == JobCategory::Pending || self.status == JobStatus::Pending
    }

    pub fn is_completed(&self) -> bool {
        self.status == JobStatus::Completed
    }
}

/// Decodes the `job_type` column.
///
/// Accepts the JSON array this crate writes and the legacy single-string
/// form (`"SM, LED"`), and never yields an empty list.
pub fn decode_job_type(raw: Option<&str>) -> Vec<String> {
    let raw = raw.map(str::trim).unwrap_or_default();
    let types = if raw.starts_with('[') {
        serde_json::from_str::<Vec<String>>(raw).unwrap_or_else(|_| split_legacy(raw))
    } else {
        split_legacy(raw)
    };
    if types.is_empty() {
        vec![DEFAULT_JOB_TYPE.to_string()]
    } else {
        types
    }
}

/// Splits a comma-joined legacy value into trimmed, non-empty segments.
pub fn split_legacy(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn decode_list(raw: Option<&str>, job_id: i64) -> Vec<String> {
    match raw.map(str::trim) {
        None | Some("") => Vec::new(),
        Some(raw) => serde_json::from_str(raw).unwrap_or_else(|_| {
            log::warn!("Non-JSON list column on job {}, keeping it as one entry", job_id);
            vec![raw.to_string()]
        }),
    }
}
