use crate::db::PersistenceGateway;
use crate::errors::AppResult;
use crate::models::{entry::Entry, period::Period, rate_config::RateConfig};
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::NaiveDate;

/// Owns the period history and the current rate configuration.
///
/// Mutations write through the gateway first and touch memory only after the
/// write succeeds, so a persistence failure always leaves the in-memory
/// state at its pre-call value. Invariant: the active period, when one
/// exists, is the last element of `periods`.
pub struct Ledger<G: PersistenceGateway> {
    store: G,
    periods: Vec<Period>,
    rate_config: RateConfig,
}

impl<G: PersistenceGateway> Ledger<G> {
    /// Load from the store. A broken or missing store degrades to an empty
    /// ledger with default rates instead of failing.
    pub fn load(mut store: G) -> Self {
        match store.load_all() {
            Ok((periods, rate_config)) => Self {
                store,
                periods,
                rate_config,
            },
            Err(e) => {
                warning(format!(
                    "Could not load saved data ({}); starting with an empty ledger.",
                    e
                ));
                Self {
                    store,
                    periods: Vec::new(),
                    rate_config: RateConfig::default(),
                }
            }
        }
    }

    pub fn rate_config(&self) -> &RateConfig {
        &self.rate_config
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn active_period(&self) -> Option<&Period> {
        self.periods.last().filter(|p| p.is_active())
    }

    /// Close the active period (if any) at `start_date` and open a new one.
    /// Both sides of the transition go through a single gateway call.
    pub fn start_new_period(&mut self, start_date: Option<NaiveDate>) -> AppResult<Period> {
        let start = start_date.unwrap_or_else(date::today);

        let closing = self.active_period().map(|p| {
            let mut closed = p.clone();
            closed.close(start);
            closed
        });
        let opening = Period::new(0, start);

        let id = self.store.save_period_boundary(closing.as_ref(), &opening)?;

        if let Some(closed) = closing {
            let ix = self.periods.len() - 1;
            self.periods[ix] = closed;
        }

        let mut opened = opening;
        opened.id = id;
        self.periods.push(opened.clone());
        Ok(opened)
    }

    /// Log hours into the active period, starting one implicitly when none
    /// exists (the entry date becomes the period start).
    pub fn log_hours(
        &mut self,
        date: NaiveDate,
        hours: f64,
        note: Option<String>,
    ) -> AppResult<Entry> {
        // Reject bad hours before the implicit period start, so an invalid
        // call changes nothing at all.
        Entry::validate_hours(hours)?;

        if self.active_period().is_none() {
            self.start_new_period(Some(date))?;
        }

        let ix = self.periods.len() - 1;
        self.periods[ix].validate_new_entry(hours)?;

        let draft = Entry::new(date, hours, note);
        let id = self.store.save_entry(self.periods[ix].id, &draft)?;

        let entry = draft.with_id(id);
        self.periods[ix].entries.push(entry.clone());
        Ok(entry)
    }

    /// Install a new rate configuration ("Save & Apply"). The previous one
    /// stays current when the write fails.
    pub fn update_rate_config(&mut self, new_config: RateConfig) -> AppResult<()> {
        self.store.save_rate_config(&new_config)?;
        self.rate_config = new_config;
        Ok(())
    }

    /// Wipe everything and reset rates to defaults. Idempotent.
    pub fn clear_all_data(&mut self) -> AppResult<()> {
        self.store.clear()?;
        self.periods.clear();
        self.rate_config = RateConfig::default();
        Ok(())
    }

    /// Entries of the active period in reverse logging order, capped at
    /// `limit`. Display helper, never mutates.
    pub fn recent_entries(&self, limit: usize) -> Vec<&Entry> {
        match self.active_period() {
            Some(period) => period.entries.iter().rev().take(limit).collect(),
            None => Vec::new(),
        }
    }
}
