use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, success, warning};

/// Wipe all periods, entries and saved rates. Idempotent.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !*yes && !confirm("This will permanently delete ALL data. Continue?") {
            warning("Clear cancelled.");
            return Ok(());
        }

        let store = SqliteStore::open(&cfg.database)?;
        let mut ledger = Ledger::load(store);

        ledger.clear_all_data()?;
        success("All data cleared. Rates reset to defaults.");
    }

    Ok(())
}
