pub mod config;
pub mod dates;
pub mod db;
pub mod error;
pub mod jobs;
pub mod reference;
pub mod report;
pub mod stats;

pub use config::{load_config, AppConfig, LogFormat, ReferenceConfig};
pub use db::{Database, DatabaseError};
pub use error::{ConfigError, JobboardError, Result};
pub use jobs::{Job, JobCategory, JobPayload, JobQuery, JobService, JobStatus};
pub use reference::ReferenceService;
pub use report::{build_report, JobReport, ReportRequest};
pub use stats::{
    filter_by_bucket, stats_by_category_and_status, stats_by_client, stats_by_employee,
    CategoryStatusStats, ClientStats, EmployeeStats, JobBucket,
};
