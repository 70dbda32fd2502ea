use crate::db::migrate::schema_version;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);
    println!(
        "{}• Schema version:{} {}",
        CYAN,
        RESET,
        schema_version(&pool.conn)?
    );

    //
    // 2) TOTALS
    //
    let period_count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM periods", [], |row| row.get(0))?;
    let entry_count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;

    println!(
        "{}• Periods:{} {}{}{}",
        CYAN, RESET, GREEN, period_count, RESET
    );
    println!(
        "{}• Entries:{} {}{}{}",
        CYAN, RESET, GREEN, entry_count, RESET
    );

    //
    // 3) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM entries ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM entries ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}

/// Integrity check: SQLite's own plus the single-active-period invariant.
pub fn check_db(pool: &mut DbPool) -> AppResult<()> {
    let verdict: String = pool
        .conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

    if verdict != "ok" {
        return Err(AppError::Other(format!("integrity check failed: {}", verdict)));
    }

    let open_periods: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM periods WHERE end_date IS NULL",
        [],
        |row| row.get(0),
    )?;

    if open_periods > 1 {
        warning(format!(
            "{} periods have no end date; only the most recent one is treated as active.",
            open_periods
        ));
    } else {
        success("Database integrity OK.");
    }

    Ok(())
}
