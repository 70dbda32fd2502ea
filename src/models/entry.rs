use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// One logged work session.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub id: i64,
    pub date: NaiveDate,    // ⇔ entries.date (TEXT "YYYY-MM-DD")
    pub hours: f64,         // ⇔ entries.hours (REAL, > 0)
    pub note: Option<String>,
    pub created_at: String, // ⇔ entries.created_at (TEXT, ISO8601)
}

impl Entry {
    /// Draft entry; the store assigns the real id on insert.
    pub fn new(date: NaiveDate, hours: f64, note: Option<String>) -> Self {
        Self {
            id: 0,
            date,
            hours,
            note,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Hours must be strictly positive (NaN is rejected too).
    pub fn validate_hours(hours: f64) -> AppResult<()> {
        if hours > 0.0 {
            Ok(())
        } else {
            Err(AppError::InvalidEntry(format!(
                "hours must be a positive number, got {}",
                hours
            )))
        }
    }
}
