//! Reference data repository: the `clients` and `employees` name lists.

use rusqlite::params;

use super::{Database, DatabaseError};

/// The two unique-name tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceTable {
    Clients,
    Employees,
}

impl ReferenceTable {
    fn table_name(self) -> &'static str {
        match self {
            ReferenceTable::Clients => "clients",
            ReferenceTable::Employees => "employees",
        }
    }
}

/// Lists all names in the table, ordered by name.
pub fn list_names(db: &Database, table: ReferenceTable) -> Result<Vec<String>, DatabaseError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(&format!(
            "SELECT name FROM {} ORDER BY name ASC",
            table.table_name()
        ))?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    })
}

/// Inserts a name unless it already exists.
///
/// Returns `true` when a row was created, `false` when the unique
/// constraint turned the insert into a no-op.
pub fn insert_if_absent(
    db: &Database,
    table: ReferenceTable,
    name: &str,
) -> Result<bool, DatabaseError> {
    db.with_conn(|conn| {
        let affected = conn.execute(
            &format!(
                "INSERT INTO {} (name) VALUES (?1) ON CONFLICT(name) DO NOTHING",
                table.table_name()
            ),
            params![name],
        )?;
        Ok(affected > 0)
    })
}

/// Inserts every missing name and returns how many were added.
pub fn ensure_names(
    db: &Database,
    table: ReferenceTable,
    names: &[String],
) -> Result<usize, DatabaseError> {
    let mut inserted = 0;
    for name in names {
        if insert_if_absent(db, table, name)? {
            inserted += 1;
        }
    }
    Ok(inserted)
}
