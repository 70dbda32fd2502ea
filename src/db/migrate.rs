use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Ordered schema migrations. Entry N brings `PRAGMA user_version` to N+1.
const MIGRATIONS: &[&str] = &[
    // v1: base schema
    r#"
    CREATE TABLE IF NOT EXISTS periods (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        start_date TEXT NOT NULL,          -- YYYY-MM-DD
        end_date   TEXT                    -- NULL while the period is active
    );

    CREATE TABLE IF NOT EXISTS entries (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        period_id  INTEGER NOT NULL REFERENCES periods(id) ON DELETE CASCADE,
        date       TEXT NOT NULL,          -- YYYY-MM-DD
        hours      REAL NOT NULL CHECK (hours > 0),
        note       TEXT,
        created_at TEXT NOT NULL           -- ISO 8601 timestamp
    );

    CREATE TABLE IF NOT EXISTS settings (
        key   TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_entries_period ON entries(period_id);
    CREATE INDEX IF NOT EXISTS idx_periods_end ON periods(end_date);
    "#,
];

pub fn schema_version(conn: &Connection) -> AppResult<i64> {
    let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(version)
}

/// Apply every migration beyond the stored `user_version`, each in its own
/// transaction.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let current = schema_version(conn)?;

    for (ix, sql) in MIGRATIONS.iter().enumerate() {
        let version = (ix + 1) as i64;
        if version <= current {
            continue;
        }

        conn.execute_batch(&format!(
            "BEGIN;\n{}\nPRAGMA user_version = {};\nCOMMIT;",
            sql, version
        ))
        .map_err(|e| AppError::Migration(format!("migration to v{} failed: {}", version, e)))?;
    }

    Ok(())
}
