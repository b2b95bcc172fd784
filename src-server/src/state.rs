//! Shared handler state.

use jobboard::config::ReferenceConfig;
use jobboard::{Database, JobService, ReferenceService};

/// Services handed to every request. Cloning shares the one storage handle.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub jobs: JobService,
    pub reference: ReferenceService,
}

impl AppState {
    pub fn new(db: Database, reference: ReferenceConfig) -> Self {
        Self {
            jobs: JobService::new(db.clone()),
            reference: ReferenceService::new(db.clone(), reference),
            db,
        }
    }
}
