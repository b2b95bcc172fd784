//! Tabular job reports.
//!
//! Builds the data behind the "export job list" view: a title, a file stem,
//! one row per job and a section listing LED deliverables. Rendering to a
//! document format is left to the caller; [`fmt::Display`] gives a plain
//! text table for terminals.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::format_day;
use crate::error::{JobboardError, Result};
use crate::jobs::{Job, JobQuery, JobService};
use crate::stats::{has_led, job_type_display};

/// Column headings for [`JobReport::rows`].
pub const REPORT_COLUMNS: [&str; 8] = [
    "Client",
    "Job Name",
    "Job Type",
    "Category",
    "Assigned To",
    "Delivery Date",
    "Status",
    "Completion",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub client: Option<String>,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ReportRequest {
    pub fn new(client: Option<String>, from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if from > to {
            return Err(JobboardError::validation(
                "start date must be before or equal to end date",
            ));
        }
        Ok(Self {
            client: client.filter(|c| !c.trim().is_empty()),
            from,
            to,
        })
    }

    fn query(&self) -> JobQuery {
        JobQuery {
            client: self.client.clone(),
            delivered_from: Some(self.from),
            delivered_to: Some(self.to),
            ..Default::default()
        }
    }

    fn title(&self) -> String {
        let base = match &self.client {
            Some(client) => format!("{} - Job List", client),
            None => "Job List Report".to_string(),
        };
        format!("{} - {} to {}", base, format_day(self.from), format_day(self.to))
    }

    fn file_stem(&self) -> String {
        let base = match &self.client {
            Some(client) => format!(
                "{}-jobs",
                client
                    .to_lowercase()
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join("-")
            ),
            None => "job-list".to_string(),
        };
        format!("{}-{}", base, format_day(self.from))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedSection {
    pub heading: String,
    pub deliverables: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobReport {
    pub title: String,
    pub file_stem: String,
    pub rows: Vec<Vec<String>>,
    pub led_sections: Vec<LedSection>,
}

impl JobReport {
    /// Lays out `jobs` for `request`. The jobs are used as given.
    pub fn from_jobs(request: &ReportRequest, jobs: &[Job]) -> Self {
        let rows = jobs.iter().map(report_row).collect();
        let led_sections = jobs
            .iter()
            .filter(|job| has_led(job) && !job.led_deliverables.is_empty())
            .map(|job| LedSection {
                heading: format!(
                    "{} - {}",
                    job.client,
                    format_day(job.delivery_date.date_naive())
                ),
                deliverables: job.led_deliverables.clone(),
            })
            .collect();

        Self {
            title: request.title(),
            file_stem: request.file_stem(),
            rows,
            led_sections,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn report_row(job: &Job) -> Vec<String> {
    let job_types = job_type_display(job);
    vec![
        job.client.clone(),
        job.job_name.clone(),
        if job_types.is_empty() {
            "N/A".to_string()
        } else {
            job_types
        },
        job.category.to_string(),
        job.assigned_to.clone(),
        format_day(job.delivery_date.date_naive()),
        job.status.to_string(),
        job.completion_status
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string()),
    ]
}

/// Fetches the jobs for `request` and lays them out.
pub fn build_report(jobs: &JobService, request: &ReportRequest) -> Result<JobReport> {
    let _span = tracing::info_span!("build_report", client = ?request.client).entered();

    let selected = jobs.list_jobs(&request.query())?;
    log::info!("Report '{}' covers {} jobs", request.title(), selected.len());
    Ok(JobReport::from_jobs(request, &selected))
}

impl fmt::Display for JobReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;

        if self.rows.is_empty() {
            return writeln!(f, "No jobs found for the selected range.");
        }

        let mut widths: Vec<usize> = REPORT_COLUMNS.iter().map(|c| c.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header: Vec<String> = REPORT_COLUMNS.iter().map(|c| c.to_string()).collect();
        write_row(f, &header, &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_row(f, &rule, &widths)?;
        for row in &self.rows {
            write_row(f, row, &widths)?;
        }

        if !self.led_sections.is_empty() {
            writeln!(f)?;
            writeln!(f, "LED Deliverables Details")?;
            for section in &self.led_sections {
                writeln!(f)?;
                writeln!(f, "{}", section.heading)?;
                for deliverable in &section.deliverables {
                    writeln!(f, "  - {}", deliverable)?;
                }
            }
        }
        Ok(())
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect();
    writeln!(f, "{}", padded.join(" | ").trim_end())
}
