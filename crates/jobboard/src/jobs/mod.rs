pub mod model;
pub mod payload;
pub mod service;

pub use model::{CompletionStatus, Job, JobCategory, JobStatus, KNOWN_JOB_TYPES};
pub use payload::{JobPayload, JobTypeInput, NormalizedJob};
pub use service::{JobQuery, JobService};
