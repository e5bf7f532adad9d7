use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Schema for the single listings table. There is no migration path: the
/// statement only runs when the table is missing.
const CARS_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS cars (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    make TEXT,
    model TEXT,
    year INTEGER,
    price REAL
)";

/// Open (or create) the database file at `path` and make sure the `cars`
/// table exists. Existing rows are left untouched, so calling this on every
/// startup is safe.
pub fn open_database(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("failed to create data directory")?;
        }
    }

    let conn = Connection::open(path)
        .with_context(|| format!("failed to open SQLite database at {}", path.display()))?;
    ensure_schema(&conn)?;
    log::info!("opened car database at {}", path.display());
    Ok(conn)
}

/// In-memory database with the same schema. Used by tests.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
    ensure_schema(&conn)?;
    Ok(conn)
}

/// Create the `cars` table if it does not exist yet.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute(CARS_SCHEMA, [])
        .context("failed to create cars table")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_creates_file_and_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("car_info.db");

        let conn = open_database(&path).unwrap();
        assert!(path.exists());

        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='cars')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists);
    }

    #[test]
    fn reopening_keeps_existing_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("car_info.db");

        {
            let conn = open_database(&path).unwrap();
            conn.execute(
                "INSERT INTO cars (make, model, year, price) VALUES ('Kia', 'Sonet', 2021, 900000.0)",
                [],
            )
            .unwrap();
        }

        let conn = open_database(&path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM cars", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, b"file").unwrap();

        let result = open_database(&blocker.join("car_info.db"));
        assert!(result.is_err());
    }
}
