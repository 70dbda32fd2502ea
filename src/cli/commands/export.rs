use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::core::ledger::Ledger;
use crate::db::SqliteStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { format, file, force } = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        let ledger = Ledger::load(store);

        ExportLogic::export(
            ledger.periods(),
            ledger.rate_config(),
            &cfg.currency,
            format,
            file.as_deref(),
            *force,
        )?;
    }

    Ok(())
}
