//! Client and employee name lists.

use crate::config::ReferenceConfig;
use crate::db::reference_repo::{self, ReferenceTable};
use crate::db::Database;
use crate::error::{JobboardError, Result};

/// Clients seeded into an empty store.
pub const DEFAULT_CLIENTS: &[&str] = &["stc", "CBK", "BK", "PH", "solutions", "Subway"];
/// Employees seeded into an empty store.
pub const DEFAULT_EMPLOYEES: &[&str] = &["Mijoy", "Sajid"];

#[derive(Clone)]
pub struct ReferenceService {
    db: Database,
    defaults: ReferenceConfig,
}

impl ReferenceService {
    pub fn new(db: Database, defaults: ReferenceConfig) -> Self {
        Self { db, defaults }
    }

    pub fn list_clients(&self) -> Result<Vec<String>> {
        Ok(reference_repo::list_names(&self.db, ReferenceTable::Clients)?)
    }

    pub fn list_employees(&self) -> Result<Vec<String>> {
        Ok(reference_repo::list_names(&self.db, ReferenceTable::Employees)?)
    }

    /// Registers a new client and returns the stored name.
    pub fn add_client(&self, name: &str) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(JobboardError::validation("Client name is required"));
        }
        if !reference_repo::insert_if_absent(&self.db, ReferenceTable::Clients, name)? {
            return Err(JobboardError::Conflict(format!(
                "Client '{}' already exists",
                name
            )));
        }
        log::info!("Added client '{}'", name);
        Ok(name.to_string())
    }

    /// Inserts whichever of `names` are missing. Returns how many were added.
    pub fn ensure_reference_set(&self, table: ReferenceTable, names: &[String]) -> Result<usize> {
        Ok(reference_repo::ensure_names(&self.db, table, names)?)
    }

    /// Seeds the configured default clients and employees.
    pub fn ensure_defaults(&self) -> Result<()> {
        let clients = self.ensure_reference_set(ReferenceTable::Clients, &self.defaults.clients)?;
        let employees =
            self.ensure_reference_set(ReferenceTable::Employees, &self.defaults.employees)?;
        if clients + employees > 0 {
            log::info!(
                "Seeded {} default clients and {} default employees",
                clients,
                employees
            );
        }
        Ok(())
    }

    /// Stored clients, or the configured defaults when storage is unavailable.
    pub fn clients_or_fallback(&self) -> Vec<String> {
        self.list_clients().unwrap_or_else(|e| {
            log::warn!("Could not load clients, using defaults: {}", e);
            self.defaults.clients.clone()
        })
    }

    /// Stored employees, or the configured defaults when storage is unavailable.
    pub fn employees_or_fallback(&self) -> Vec<String> {
        self.list_employees().unwrap_or_else(|e| {
            log::warn!("Could not load employees, using defaults: {}", e);
            self.defaults.employees.clone()
        })
    }
}
