//! HTTP handlers, organized by resource:
//! - `clients`: client list and registration
//! - `employees`: employee list and per-employee jobs
//! - `jobs`: job CRUD and dashboard buckets
//! - `stats`: dashboard counters
//! - `reports`: job list reports
//! - `health`: liveness and storage check

pub mod clients;
pub mod employees;
pub mod health;
pub mod jobs;
pub mod reports;
pub mod stats;

use chrono::NaiveDate;
use jobboard::dates::parse_calendar_date;
use serde::Deserialize;

use crate::error::ApiError;

/// `?client=&date=` as sent by the dashboard.
#[derive(Debug, Default, Deserialize)]
pub struct JobFilterParams {
    pub client: Option<String>,
    pub date: Option<String>,
}

impl JobFilterParams {
    pub fn to_query(&self) -> Result<jobboard::JobQuery, ApiError> {
        Ok(jobboard::JobQuery {
            client: self.client.clone().filter(|c| !c.is_empty()),
            date: parse_optional_day(self.date.as_deref())?,
            ..Default::default()
        })
    }
}

/// Empty or missing means no filter.
pub fn parse_optional_day(raw: Option<&str>) -> Result<Option<NaiveDate>, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => Ok(Some(parse_calendar_date(raw)?)),
    }
}
