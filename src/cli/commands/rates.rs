use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::models::rate_config::RateConfig;
use crate::ui::messages::success;

/// View or Save & Apply the rate configuration. Unset flags keep the current
/// values, so `rates --tips` alone just re-enables the stored tip rate.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rates {
        print,
        base,
        tips,
        no_tips,
        avg_tip,
    } = cmd
    {
        let store = SqliteStore::open(&cfg.database)?;
        let mut ledger = Ledger::load(store);

        let wants_update = base.is_some() || *tips || *no_tips || avg_tip.is_some();

        if wants_update {
            let current = ledger.rate_config().clone();

            let include_tips = if *tips {
                true
            } else if *no_tips {
                false
            } else {
                current.include_tips
            };

            let new_config = RateConfig::new(
                base.unwrap_or(current.base_rate),
                include_tips,
                avg_tip.unwrap_or(current.avg_tip_rate),
            )?;

            ledger.update_rate_config(new_config)?;
            success(format!(
                "Rates updated. {}",
                ledger.rate_config().describe(&cfg.currency)
            ));
        }

        if *print || !wants_update {
            println!("Rate: {}", ledger.rate_config().describe(&cfg.currency));
        }
    }

    Ok(())
}
