//! Library-level tests for Ledger semantics: invariants, validation order,
//! and rollback behavior on failed durable writes.

use chrono::NaiveDate;
use ledgerflow::core::calculator;
use ledgerflow::core::ledger::Ledger;
use ledgerflow::db::{PersistenceGateway, SqliteStore};
use ledgerflow::errors::{AppError, AppResult};
use ledgerflow::models::{entry::Entry, period::Period, rate_config::RateConfig};
use std::env;
use std::fs;

fn mem_store() -> SqliteStore {
    SqliteStore::open(":memory:").expect("in-memory store")
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Gateway double whose write paths can be switched off, to observe how the
/// Ledger behaves when the disk says no.
struct FlakyStore {
    fail_entries: bool,
    fail_rates: bool,
    next_id: i64,
}

impl FlakyStore {
    fn new() -> Self {
        Self {
            fail_entries: false,
            fail_rates: false,
            next_id: 0,
        }
    }
}

impl PersistenceGateway for FlakyStore {
    fn load_all(&mut self) -> AppResult<(Vec<Period>, RateConfig)> {
        Ok((Vec::new(), RateConfig::default()))
    }

    fn save_entry(&mut self, _period_id: i64, _entry: &Entry) -> AppResult<i64> {
        if self.fail_entries {
            return Err(AppError::Persistence("disk full".into()));
        }
        self.next_id += 1;
        Ok(self.next_id)
    }

    fn save_period_boundary(
        &mut self,
        _closing: Option<&Period>,
        _opening: &Period,
    ) -> AppResult<i64> {
        self.next_id += 1;
        Ok(self.next_id)
    }

    fn save_rate_config(&mut self, _rate: &RateConfig) -> AppResult<()> {
        if self.fail_rates {
            return Err(AppError::Persistence("disk full".into()));
        }
        Ok(())
    }

    fn clear(&mut self) -> AppResult<()> {
        Ok(())
    }
}

/// Gateway whose load always fails, standing in for a corrupt store.
struct BrokenStore;

impl PersistenceGateway for BrokenStore {
    fn load_all(&mut self) -> AppResult<(Vec<Period>, RateConfig)> {
        Err(AppError::Persistence("file is not a database".into()))
    }
    fn save_entry(&mut self, _period_id: i64, _entry: &Entry) -> AppResult<i64> {
        Ok(1)
    }
    fn save_period_boundary(
        &mut self,
        _closing: Option<&Period>,
        _opening: &Period,
    ) -> AppResult<i64> {
        Ok(1)
    }
    fn save_rate_config(&mut self, _rate: &RateConfig) -> AppResult<()> {
        Ok(())
    }
    fn clear(&mut self) -> AppResult<()> {
        Ok(())
    }
}

#[test]
fn total_hours_is_sum_of_logged_hours() {
    let mut ledger = Ledger::load(mem_store());

    ledger.log_hours(day("2025-09-01"), 5.0, None).unwrap();
    ledger.log_hours(day("2025-09-02"), 3.0, None).unwrap();
    ledger.log_hours(day("2025-09-02"), 0.5, None).unwrap();

    let period = ledger.active_period().expect("active period");
    assert!(approx(period.total_hours(), 8.5));
    assert_eq!(period.entries.len(), 3);
}

#[test]
fn first_period_starts_empty_and_active() {
    let mut ledger = Ledger::load(mem_store());
    assert!(ledger.active_period().is_none());

    let period = ledger.start_new_period(Some(day("2025-09-01"))).unwrap();

    assert!(period.is_active());
    assert!(period.entries.is_empty());
    assert!(approx(period.total_hours(), 0.0));
    assert_eq!(ledger.periods().len(), 1);
}

#[test]
fn start_new_period_keeps_single_active_invariant() {
    let mut ledger = Ledger::load(mem_store());

    ledger.log_hours(day("2025-09-01"), 5.0, None).unwrap();
    ledger.start_new_period(Some(day("2025-09-15"))).unwrap();

    let periods = ledger.periods();
    assert_eq!(periods.len(), 2);

    // the previous period is now closed at the new boundary
    assert_eq!(periods[0].end_date, Some(day("2025-09-15")));

    // exactly one active period, and it is the most recently started one
    let actives: Vec<_> = periods.iter().filter(|p| p.is_active()).collect();
    assert_eq!(actives.len(), 1);
    assert_eq!(actives[0].id, periods[1].id);
    assert_eq!(ledger.active_period().expect("active").id, periods[1].id);
}

#[test]
fn log_hours_starts_period_implicitly() {
    let mut ledger = Ledger::load(mem_store());

    let entry = ledger
        .log_hours(day("2025-09-03"), 4.0, Some("opening".to_string()))
        .unwrap();

    assert!(entry.id > 0);
    let period = ledger.active_period().expect("active period");
    assert_eq!(period.start_date, day("2025-09-03"));
    assert_eq!(period.entries.len(), 1);
}

#[test]
fn zero_hours_rejected_without_side_effects() {
    let mut ledger = Ledger::load(mem_store());

    let err = ledger.log_hours(day("2025-09-01"), 0.0, None).unwrap_err();
    assert!(matches!(err, AppError::InvalidEntry(_)));

    // no implicit period was started either
    assert!(ledger.active_period().is_none());
    assert!(ledger.periods().is_empty());
}

#[test]
fn closed_period_rejects_entries() {
    let mut period = Period::new(1, day("2025-01-01"));
    period.close(day("2025-01-31"));

    let err = period.validate_new_entry(2.0).unwrap_err();
    assert!(matches!(err, AppError::InvalidEntry(_)));
}

#[test]
fn negative_rates_rejected() {
    assert!(matches!(
        RateConfig::new(-1.0, false, 0.0),
        Err(AppError::InvalidRate(_))
    ));
    assert!(matches!(
        RateConfig::new(7.0, true, -0.01),
        Err(AppError::InvalidRate(_))
    ));
}

#[test]
fn effective_rate_scenario() {
    let rate = RateConfig::new(7.00, true, 23.15).unwrap();
    assert!(approx(rate.effective_hourly_rate(), 30.15));

    let mut ledger = Ledger::load(mem_store());
    ledger.update_rate_config(rate).unwrap();
    ledger.log_hours(day("2025-09-01"), 5.0, None).unwrap();
    ledger.log_hours(day("2025-09-02"), 3.0, None).unwrap();

    let period = ledger.active_period().expect("active period");
    assert!(approx(period.total_hours(), 8.0));
    assert!(approx(
        calculator::actual_earnings(period, ledger.rate_config()),
        241.20
    ));
}

#[test]
fn tip_rate_ignored_when_tips_excluded() {
    let rate = RateConfig::new(10.0, false, 99.0).unwrap();
    assert!(approx(rate.effective_hourly_rate(), 10.0));
}

#[test]
fn actual_earnings_linear_in_hours() {
    let rate = RateConfig::default();

    let mut single = Period::new(1, day("2025-09-01"));
    single.entries.push(Entry::new(day("2025-09-01"), 4.0, None));

    let mut double = Period::new(2, day("2025-09-01"));
    double.entries.push(Entry::new(day("2025-09-01"), 4.0, None));
    double.entries.push(Entry::new(day("2025-09-02"), 4.0, None));

    assert!(approx(
        calculator::actual_earnings(&double, &rate),
        2.0 * calculator::actual_earnings(&single, &rate)
    ));
}

#[test]
fn projected_earnings_degrades_on_zero_target() {
    let rate = RateConfig::new(7.00, true, 23.15).unwrap();

    assert!(approx(calculator::projected_earnings(&rate, 0.0), 0.0));
    assert!(approx(calculator::projected_earnings(&rate, -5.0), 0.0));
    assert!(approx(calculator::projected_earnings(&rate, 40.0), 1206.0));
}

#[test]
fn recent_entries_reverse_order_capped() {
    let mut ledger = Ledger::load(mem_store());

    for (d, h) in [("2025-09-01", 1.0), ("2025-09-02", 2.0), ("2025-09-03", 3.0)] {
        ledger.log_hours(day(d), h, None).unwrap();
    }

    let recent = ledger.recent_entries(2);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].date, day("2025-09-03"));
    assert_eq!(recent[1].date, day("2025-09-02"));
}

#[test]
fn rate_config_roundtrip_through_store() {
    let mut path = env::temp_dir();
    path.push("rate_roundtrip_ledgerflow.sqlite");
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();

    {
        let store = SqliteStore::open(&db_path).expect("open store");
        let mut ledger = Ledger::load(store);
        let cfg = RateConfig::new(12.5, true, 4.25).unwrap();
        ledger.update_rate_config(cfg).unwrap();
    }

    let mut store = SqliteStore::open(&db_path).expect("reopen store");
    let (periods, rate) = store.load_all().expect("load_all");

    assert!(periods.is_empty());
    assert_eq!(
        rate,
        RateConfig {
            base_rate: 12.5,
            include_tips: true,
            avg_tip_rate: 4.25,
        }
    );
}

#[test]
fn periods_and_entries_roundtrip_through_store() {
    let mut path = env::temp_dir();
    path.push("period_roundtrip_ledgerflow.sqlite");
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();

    {
        let store = SqliteStore::open(&db_path).expect("open store");
        let mut ledger = Ledger::load(store);
        ledger
            .log_hours(day("2025-09-01"), 5.0, Some("brunch".to_string()))
            .unwrap();
        ledger.start_new_period(Some(day("2025-09-15"))).unwrap();
        ledger.log_hours(day("2025-09-16"), 2.5, None).unwrap();
    }

    let store = SqliteStore::open(&db_path).expect("reopen store");
    let ledger = Ledger::load(store);

    let periods = ledger.periods();
    assert_eq!(periods.len(), 2);
    assert_eq!(periods[0].end_date, Some(day("2025-09-15")));
    assert_eq!(periods[0].entries.len(), 1);
    assert_eq!(periods[0].entries[0].note.as_deref(), Some("brunch"));
    assert!(periods[1].is_active());
    assert!(approx(periods[1].total_hours(), 2.5));
}

#[test]
fn clear_all_data_idempotent() {
    let mut ledger = Ledger::load(mem_store());
    ledger.log_hours(day("2025-09-01"), 5.0, None).unwrap();
    ledger
        .update_rate_config(RateConfig::new(20.0, false, 0.0).unwrap())
        .unwrap();

    ledger.clear_all_data().unwrap();
    assert!(ledger.periods().is_empty());
    assert_eq!(*ledger.rate_config(), RateConfig::default());

    // a second clear leaves the same empty-with-defaults state
    ledger.clear_all_data().unwrap();
    assert!(ledger.periods().is_empty());
    assert_eq!(*ledger.rate_config(), RateConfig::default());
}

#[test]
fn failed_entry_write_leaves_ledger_unchanged() {
    let mut store = FlakyStore::new();
    store.fail_entries = true;
    let mut ledger = Ledger::load(store);

    let err = ledger.log_hours(day("2025-09-01"), 5.0, None).unwrap_err();
    assert!(matches!(err, AppError::Persistence(_)));

    // the implicit period start was durable and stays; the entry does not
    let period = ledger.active_period().expect("active period");
    assert!(period.entries.is_empty());
    assert!(approx(period.total_hours(), 0.0));
}

#[test]
fn failed_rate_write_keeps_previous_config() {
    let mut store = FlakyStore::new();
    store.fail_rates = true;
    let mut ledger = Ledger::load(store);

    let err = ledger
        .update_rate_config(RateConfig::new(50.0, false, 0.0).unwrap())
        .unwrap_err();
    assert!(matches!(err, AppError::Persistence(_)));

    assert_eq!(*ledger.rate_config(), RateConfig::default());
}

#[test]
fn broken_store_degrades_to_empty_ledger() {
    let ledger = Ledger::load(BrokenStore);

    assert!(ledger.periods().is_empty());
    assert!(ledger.active_period().is_none());
    assert_eq!(*ledger.rate_config(), RateConfig::default());
}
