use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::money;

/// Log worked hours into the active period (starting one when needed).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { hours, date: date_arg, note } = cmd {
        let d = date::parse_date_or_today(date_arg.as_ref())?;

        let store = SqliteStore::open(&cfg.database)?;
        let mut ledger = Ledger::load(store);

        let entry = ledger.log_hours(d, *hours, note.clone())?;
        let earned = entry.hours * ledger.rate_config().effective_hourly_rate();

        success(format!(
            "Logged {}h on {} (+ {}).",
            entry.hours,
            entry.date_str(),
            money(&cfg.currency, earned)
        ));
    }

    Ok(())
}
