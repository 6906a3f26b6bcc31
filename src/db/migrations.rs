use rusqlite::{Connection, Result};
use std::collections::HashMap;

/// Current database schema version
const CURRENT_VERSION: u32 = 2;

type Migration = fn(&rusqlite::Transaction) -> Result<(), rusqlite::Error>;

/// Migration system for managing database schema versions
pub struct MigrationManager;

impl MigrationManager {
    /// Initialize the database with the current schema
    /// This creates the schema_version table and applies all pending migrations
    pub fn initialize(conn: &Connection) -> Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS schema_version (
                version INTEGER PRIMARY KEY
            )",
            [],
        )?;

        let current_version = Self::get_version(conn).unwrap_or(0);

        for version in (current_version + 1)..=CURRENT_VERSION {
            log::info!("Applying schema migration v{}", version);
            Self::apply_migration(conn, version)?;
        }

        Ok(())
    }

    /// Apply a specific migration by version number
    fn apply_migration(conn: &Connection, version: u32) -> Result<()> {
        let migrations = get_migrations();
        if let Some(migration) = migrations.get(&version) {
            let tx = conn.unchecked_transaction()?;
            migration(&tx)?;
            tx.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                [version],
            )?;
            tx.commit()?;
            Ok(())
        } else {
            Err(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_MISUSE),
                Some(format!("No migration found for version {}", version)),
            ))
        }
    }

    /// Get the current schema version
    pub fn get_version(conn: &Connection) -> Result<u32> {
        conn.query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )
    }
}

/// Get all migrations indexed by version
fn get_migrations() -> HashMap<u32, Migration> {
    let mut migrations: HashMap<u32, Migration> = HashMap::new();
    migrations.insert(1, migration_v1);
    migrations.insert(2, migration_v2);
    migrations
}

/// Migration v1: plain todo list with an archive of cleared tasks
fn migration_v1(tx: &rusqlite::Transaction) -> Result<(), rusqlite::Error> {
    tx.execute(
        "CREATE TABLE todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL UNIQUE,
            done INTEGER NOT NULL DEFAULT 0,
            created_ts INTEGER NOT NULL,
            finished_ts INTEGER NULL
        )",
        [],
    )?;

    // Archive keeps the original id; rows are only ever appended
    tx.execute(
        "CREATE TABLE todos_archive (
            deleted_ts INTEGER NOT NULL,
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            done INTEGER NOT NULL DEFAULT 0,
            created_ts INTEGER NOT NULL,
            finished_ts INTEGER NULL
        )",
        [],
    )?;

    Ok(())
}

/// Migration v2: priority and alarm columns
fn migration_v2(tx: &rusqlite::Transaction) -> Result<(), rusqlite::Error> {
    for table in ["todos", "todos_archive"] {
        tx.execute(
            &format!("ALTER TABLE {} ADD COLUMN priority INTEGER NOT NULL DEFAULT 0", table),
            [],
        )?;
        tx.execute(&format!("ALTER TABLE {} ADD COLUMN alarm_ts INTEGER NULL", table), [])?;
        tx.execute(&format!("ALTER TABLE {} ADD COLUMN alarm_text TEXT NULL", table), [])?;
    }

    tx.execute(
        "CREATE INDEX idx_todos_listing ON todos(done, priority DESC, created_ts)",
        [],
    )?;

    Ok(())
}
