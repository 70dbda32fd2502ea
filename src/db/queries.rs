use crate::errors::{AppError, AppResult};
use crate::models::{entry::Entry, period::Period, rate_config::RateConfig};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Settings keys. `rate_config` holds the serialized wage model, and
/// `active_period` mirrors the id of the one period with no end date.
pub const KEY_RATE_CONFIG: &str = "rate_config";
pub const KEY_ACTIVE_PERIOD: &str = "active_period";

fn parse_db_date(raw: &str) -> Result<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(raw.to_string())),
        )
    })
}

pub fn map_entry_row(row: &Row) -> Result<Entry> {
    let date_str: String = row.get("date")?;

    Ok(Entry {
        id: row.get("id")?,
        date: parse_db_date(&date_str)?,
        hours: row.get("hours")?,
        note: row.get("note")?,
        created_at: row.get("created_at")?,
    })
}

pub fn map_period_row(row: &Row) -> Result<Period> {
    let start_str: String = row.get("start_date")?;
    let end_str: Option<String> = row.get("end_date")?;

    let end_date = match end_str {
        Some(raw) => Some(parse_db_date(&raw)?),
        None => None,
    };

    Ok(Period {
        id: row.get("id")?,
        start_date: parse_db_date(&start_str)?,
        end_date,
        entries: Vec::new(),
    })
}

/// Load all periods in insertion order, each with its entries in logging
/// order.
pub fn load_periods(conn: &Connection) -> AppResult<Vec<Period>> {
    let mut periods = {
        let mut stmt =
            conn.prepare("SELECT id, start_date, end_date FROM periods ORDER BY id ASC")?;
        let rows = stmt.query_map([], map_period_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        out
    };

    let mut stmt = conn.prepare(
        "SELECT id, date, hours, note, created_at FROM entries
         WHERE period_id = ?1
         ORDER BY id ASC",
    )?;

    for period in &mut periods {
        let rows = stmt.query_map([period.id], map_entry_row)?;
        for r in rows {
            period.entries.push(r?);
        }
    }

    Ok(periods)
}

pub fn load_rate_config(conn: &Connection) -> AppResult<Option<RateConfig>> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key = ?1",
            [KEY_RATE_CONFIG],
            |row| row.get(0),
        )
        .optional()?;

    match raw {
        Some(json) => {
            let rate = serde_json::from_str(&json)
                .map_err(|e| AppError::Config(format!("unreadable rate settings: {}", e)))?;
            Ok(Some(rate))
        }
        None => Ok(None),
    }
}

pub fn save_setting(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO settings (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn insert_entry(conn: &Connection, period_id: i64, entry: &Entry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO entries (period_id, date, hours, note, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            period_id,
            entry.date_str(),
            entry.hours,
            entry.note,
            entry.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_period(conn: &Connection, period: &Period) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO periods (start_date, end_date) VALUES (?1, ?2)",
        params![
            period.start_str(),
            period.end_date.map(|d| d.format("%Y-%m-%d").to_string()),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_period_end(conn: &Connection, period: &Period) -> AppResult<()> {
    conn.execute(
        "UPDATE periods SET end_date = ?1 WHERE id = ?2",
        params![
            period.end_date.map(|d| d.format("%Y-%m-%d").to_string()),
            period.id,
        ],
    )?;
    Ok(())
}
