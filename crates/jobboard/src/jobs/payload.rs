//! Incoming job payloads and their normalization into storable values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::{CompletionStatus, JobCategory, JobStatus, DEFAULT_JOB_NAME, DEFAULT_JOB_TYPE};
use crate::dates::{format_timestamp, parse_delivery_date};
use crate::db::job_repo::JobRecord;
use crate::db::DatabaseError;
use crate::error::{JobboardError, Result};

/// `jobType` as callers send it: a list, or a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobTypeInput {
    Many(Vec<String>),
    One(String),
}

/// A create/update request body. Every field is optional on the wire;
/// [`JobPayload::normalize`] decides what is required and what defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPayload {
    pub client: Option<String>,
    #[serde(alias = "assigned_to")]
    pub assigned_to: Option<String>,
    pub category: Option<String>,
    #[serde(alias = "job_title")]
    pub job_title: Option<String>,
    #[serde(alias = "job_name")]
    pub job_name: Option<String>,
    #[serde(alias = "job_type")]
    pub job_type: Option<JobTypeInput>,
    #[serde(alias = "delivery_date")]
    pub delivery_date: Option<String>,
    pub status: Option<String>,
    #[serde(alias = "completion_status")]
    pub completion_status: Option<String>,
    #[serde(alias = "led_deliverables")]
    pub led_deliverables: Option<Vec<String>>,
    pub description: Option<String>,
}

/// A validated job with every default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedJob {
    pub client: String,
    pub assigned_to: String,
    pub category: JobCategory,
    pub job_title: Option<String>,
    pub job_name: String,
    pub job_type: Vec<String>,
    pub delivery_date: DateTime<Utc>,
    pub status: JobStatus,
    pub completion_status: Option<CompletionStatus>,
    pub led_deliverables: Vec<String>,
    pub description: Option<String>,
}

impl JobPayload {
    /// Validates required fields and fills in defaults.
    ///
    /// `now` is used when no delivery date is given.
    pub fn normalize(self, now: DateTime<Utc>) -> Result<NormalizedJob> {
        let client = required(self.client, "client")?;
        let assigned_to = required(self.assigned_to, "assignedTo")?;

        let job_type = match self.job_type {
            Some(JobTypeInput::Many(types)) if !types.is_empty() => types,
            Some(JobTypeInput::One(single)) if !single.is_empty() => vec![single],
            _ => vec![DEFAULT_JOB_TYPE.to_string()],
        };

        let delivery_date = match non_empty(self.delivery_date) {
            Some(raw) => parse_delivery_date(&raw)?,
            None => now,
        };

        let category = match non_empty(self.category) {
            Some(raw) => raw.parse()?,
            None => JobCategory::default(),
        };

        let status = match non_empty(self.status) {
            Some(raw) => raw.parse()?,
            None => JobStatus::default(),
        };

        let completion_status = non_empty(self.completion_status)
            .map(|raw| raw.parse())
            .transpose()?;

        Ok(NormalizedJob {
            client,
            assigned_to,
            category,
            job_title: non_empty(self.job_title),
            job_name: non_empty(self.job_name).unwrap_or_else(|| DEFAULT_JOB_NAME.to_string()),
            job_type,
            delivery_date,
            status,
            completion_status,
            led_deliverables: self.led_deliverables.unwrap_or_default(),
            description: non_empty(self.description),
        })
    }
}

impl NormalizedJob {
    /// Encodes the job into column values, stamped with `timestamp`.
    pub fn to_record(&self, timestamp: DateTime<Utc>) -> std::result::Result<JobRecord, DatabaseError> {
        Ok(JobRecord {
            client: self.client.clone(),
            assigned_to: self.assigned_to.clone(),
            category: self.category.as_str().to_string(),
            job_title: self.job_title.clone(),
            job_name: self.job_name.clone(),
            job_type: serde_json::to_string(&self.job_type)?,
            delivery_date: format_timestamp(self.delivery_date),
            status: self.status.as_str().to_string(),
            completion_status: self.completion_status.map(|c| c.as_str().to_string()),
            led_deliverables: serde_json::to_string(&self.led_deliverables)?,
            description: self.description.clone(),
            timestamp: format_timestamp(timestamp),
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| JobboardError::validation(format!("{} is required", field)))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
