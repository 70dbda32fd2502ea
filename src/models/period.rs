use super::entry::Entry;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::Serialize;

/// A bounded span of time over which entries accumulate.
/// At most one period is active (no end date) at a time; the Ledger keeps it
/// as the last element of its sequence.
#[derive(Debug, Clone, Serialize)]
pub struct Period {
    pub id: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    /// Insertion order = logging order, never resorted by date.
    pub entries: Vec<Entry>,
}

impl Period {
    pub fn new(id: i64, start_date: NaiveDate) -> Self {
        Self {
            id,
            start_date,
            end_date: None,
            entries: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.end_date.is_none()
    }

    pub fn total_hours(&self) -> f64 {
        self.entries.iter().map(|e| e.hours).sum()
    }

    /// Checks that must pass before anything reaches the store.
    pub fn validate_new_entry(&self, hours: f64) -> AppResult<()> {
        Entry::validate_hours(hours)?;

        if let Some(end) = self.end_date {
            return Err(AppError::InvalidEntry(format!(
                "period closed on {} no longer accepts entries",
                end.format("%Y-%m-%d")
            )));
        }

        Ok(())
    }

    pub fn close(&mut self, end_date: NaiveDate) {
        self.end_date = Some(end_date);
    }

    pub fn start_str(&self) -> String {
        self.start_date.format("%Y-%m-%d").to_string()
    }
}
