//! Isolated storage for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

use jobboard::config::ReferenceConfig;
use jobboard::{Database, JobService, ReferenceService};

/// A file-backed database in a temporary directory, with both services.
pub struct TestHarness {
    /// Keeps the directory alive for the harness lifetime.
    temp_dir: TempDir,
    pub db_path: PathBuf,
    pub db: Database,
    pub jobs: JobService,
    pub reference: ReferenceService,
}

impl TestHarness {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("data").join("jobboard.db");
        let db = Database::open(&db_path).expect("Failed to open test database");

        Self {
            jobs: JobService::new(db.clone()),
            reference: ReferenceService::new(db.clone(), ReferenceConfig::default()),
            temp_dir,
            db_path,
            db,
        }
    }

    /// Harness with the default clients and employees already seeded.
    pub fn seeded() -> Self {
        let harness = Self::new();
        harness
            .reference
            .ensure_defaults()
            .expect("Failed to seed reference data");
        harness
    }

    /// Reopens the same database file, running migrations again.
    pub fn reopen(&self) -> Database {
        Database::open(&self.db_path).expect("Failed to reopen test database")
    }
}
