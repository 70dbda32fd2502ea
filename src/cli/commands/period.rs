use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::db::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::formatting::hours;

/// Start a new period (closing the active one) or show the active period.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Period { start, date: date_arg } = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        let mut ledger = Ledger::load(store);

        if *start {
            let boundary = match date_arg {
                Some(raw) => Some(
                    date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?,
                ),
                None => None,
            };

            let period = ledger.start_new_period(boundary)?;
            success(format!("Started new period on {}.", period.start_str()));
        } else {
            match ledger.active_period() {
                Some(p) => info(format!(
                    "Active period started {} ({} entries, {}h logged).",
                    p.start_str(),
                    p.entries.len(),
                    hours(p.total_hours())
                )),
                None => info("No active period. Log hours or run 'ledgerflow period --start'."),
            }
        }
    }

    Ok(())
}
