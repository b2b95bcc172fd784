//! Builders for job payloads.

#![allow(dead_code)]

use jobboard::jobs::{Job, JobPayload, JobService, JobTypeInput};

/// Builder for `JobPayload` values.
pub struct JobBuilder {
    payload: JobPayload,
}

impl JobBuilder {
    /// A job for `client` assigned to `assignee`; everything else defaults.
    pub fn new(client: &str, assignee: &str) -> Self {
        Self {
            payload: JobPayload {
                client: Some(client.to_string()),
                assigned_to: Some(assignee.to_string()),
                ..Default::default()
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.payload.job_name = Some(name.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.payload.category = Some(category.to_string());
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.payload.status = Some(status.to_string());
        self
    }

    pub fn completion(mut self, completion: &str) -> Self {
        self.payload.completion_status = Some(completion.to_string());
        self
    }

    /// Delivery date in any accepted input shape.
    pub fn delivered(mut self, when: &str) -> Self {
        self.payload.delivery_date = Some(when.to_string());
        self
    }

    pub fn types(mut self, types: &[&str]) -> Self {
        self.payload.job_type = Some(JobTypeInput::Many(
            types.iter().map(|t| t.to_string()).collect(),
        ));
        self
    }

    pub fn led(mut self, deliverables: &[&str]) -> Self {
        self.payload.led_deliverables =
            Some(deliverables.iter().map(|d| d.to_string()).collect());
        self
    }

    pub fn build(self) -> JobPayload {
        self.payload
    }

    /// Stores the job through `service` and returns it.
    pub fn create(self, service: &JobService) -> Job {
        service
            .create_job(self.payload)
            .expect("Failed to create test job")
    }
}
