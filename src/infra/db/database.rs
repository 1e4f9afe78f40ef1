//! SQLite database setup and connection management for carbook.
//! Handles database initialization, schema creation, and connection management.

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

use super::repository::{CarRepository, DbConn, OwnerRepository};

const SCHEMA_VERSION: i32 = 1;

/// Database wrapper that manages the SQLite connection
pub struct Database {
    conn: DbConn,
}

impl Database {
    /// Create an in-memory database (useful for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init()?;
        Ok(db)
    }

    /// Create or open the database at a specific path
    pub fn open_at(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database directory {}", parent.display())
            })?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database at {}", path.display()))?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init()?;
        log::info!("Opened database at {}", path.display());
        Ok(db)
    }

    /// Initialize database schema
    fn init(&self) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .expect("Database: failed to acquire database lock");

        // Cascading deletes depend on this; SQLite leaves it off per connection.
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        let existing_version: i32 =
            conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

        if existing_version > SCHEMA_VERSION {
            anyhow::bail!(
                "Database schema version {} is newer than supported version {}",
                existing_version,
                SCHEMA_VERSION
            );
        }

        Self::create_schema(&conn)?;
        if existing_version < SCHEMA_VERSION {
            conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
            log::debug!(
                "Schema upgraded from version {} to {}",
                existing_version,
                SCHEMA_VERSION
            );
        }

        Ok(())
    }

    /// Get a reference to the connection
    pub fn connection(&self) -> DbConn {
        self.conn.clone()
    }

    pub fn owner_repo(&self) -> OwnerRepository {
        OwnerRepository::new(self.connection())
    }

    pub fn car_repo(&self) -> CarRepository {
        CarRepository::new(self.connection())
    }

    fn create_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS owners (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL CHECK (length(name) <= 100),
                age INTEGER NOT NULL,
                address TEXT CHECK (address IS NULL OR length(address) <= 255)
            );

            CREATE TABLE IF NOT EXISTS cars (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                owner_id INTEGER NOT NULL,
                model TEXT NOT NULL CHECK (length(model) <= 100),
                year INTEGER NOT NULL,
                FOREIGN KEY(owner_id) REFERENCES owners(id) ON DELETE CASCADE
            );

            CREATE INDEX IF NOT EXISTS idx_cars_owner_id ON cars(owner_id);
            "#,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewOwner;

    #[test]
    fn test_database_open_in_memory() {
        let db = Database::open_in_memory().unwrap();
        let conn = db.connection();
        let guard = conn.lock().unwrap();
        let res: i32 = guard.query_row("SELECT 1", [], |row| row.get(0)).unwrap();
        assert_eq!(res, 1);
    }

    #[test]
    fn test_schema_is_created_with_version() {
        let db = Database::open_in_memory().unwrap();
        let conn = db.connection();
        let guard = conn.lock().unwrap();

        let tables: i32 = guard
            .query_row(
                "SELECT count(*) FROM sqlite_master WHERE type='table' AND name IN ('owners','cars')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 2);

        let version: i32 = guard
            .pragma_query_value(None, "user_version", |row| row.get(0))
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);

        let fk: i32 = guard
            .pragma_query_value(None, "foreign_keys", |row| row.get(0))
            .unwrap();
        assert_eq!(fk, 1);
    }

    #[test]
    fn test_reopen_keeps_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("carbook.sqlite");

        {
            let db = Database::open_at(&path).unwrap();
            db.owner_repo()
                .insert(&NewOwner::new("Anna", 31, "").unwrap())
                .unwrap();
        }

        let db = Database::open_at(&path).unwrap();
        let owners = db.owner_repo().find_all().unwrap();
        assert_eq!(owners.len(), 1);
        assert_eq!(owners[0].name, "Anna");
    }

    #[test]
    fn test_newer_schema_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("future.sqlite");
        {
            let conn = Connection::open(&path).unwrap();
            conn.pragma_update(None, "user_version", SCHEMA_VERSION + 1)
                .unwrap();
        }

        let err = Database::open_at(&path).err().expect("open should fail");
        assert!(err.to_string().contains("newer than supported"));
    }
}
