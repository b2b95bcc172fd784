//! Database module for persistent storage.
//!
//! Uses rusqlite (SQLite) with a thread-safe `Database` handle.
//! All access is serialized through a `Mutex<Connection>`.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use rusqlite::Connection;

pub mod error;
pub mod job_repo;
pub mod migrations;
pub mod reference_repo;

pub use error::DatabaseError;

/// Thread-safe database handle wrapping a single rusqlite connection.
///
/// Cloning is cheap (inner `Arc`), so the handle is opened once per
/// process and shared by every request.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Opens (or creates) the database at the given path and runs all
    /// pending migrations.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DatabaseError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;

        migrations::run_all(&conn)?;

        log::info!("Database opened at {}", path.display());

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Opens the configured database, falling back to the default location.
    ///
    /// Fails with [`DatabaseError::MissingConfiguration`] when neither is
    /// available.
    pub fn open_configured(path: Option<&Path>) -> Result<Self, DatabaseError> {
        let path = resolve_database_path(path, dirs::home_dir())?;
        Self::open(&path)
    }

    /// Opens an in-memory database for testing. Runs all migrations.
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()?;

        migrations::run_all(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Provides locked access to the underlying connection.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, DatabaseError>
    where
        F: FnOnce(&Connection) -> Result<T, DatabaseError>,
    {
        let conn = self.conn.lock().map_err(|_| DatabaseError::LockPoisoned)?;
        f(&conn)
    }

    /// Runs a trivial query to confirm the store answers.
    pub fn ping(&self) -> Result<(), DatabaseError> {
        self.with_conn(|conn| {
            conn.query_row("SELECT 1", [], |r| r.get::<_, i64>(0))?;
            Ok(())
        })
    }
}

/// Returns the canonical database path: `~/.jobboard/data/jobboard.db`.
pub fn default_database_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| database_path_under(&home))
}

fn database_path_under(home: &Path) -> PathBuf {
    home.join(".jobboard").join("data").join("jobboard.db")
}

/// Picks the configured path, else the default under `home`.
pub fn resolve_database_path(
    configured: Option<&Path>,
    home: Option<PathBuf>,
) -> Result<PathBuf, DatabaseError> {
    match (configured, home) {
        (Some(path), _) => Ok(path.to_path_buf()),
        (None, Some(home)) => Ok(database_path_under(&home)),
        (None, None) => Err(DatabaseError::MissingConfiguration(
            "no database path configured and no home directory found".to_string(),
        )),
    }
}
