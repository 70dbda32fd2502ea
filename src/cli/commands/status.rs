use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator;
use crate::core::ledger::Ledger;
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_amount};
use crate::utils::formatting::{hours, money};

/// Show totals for the active period plus the projection against the target.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { target } = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        let ledger = Ledger::load(store);
        let rate = ledger.rate_config();
        let target_hours = target.unwrap_or(cfg.target_hours);

        println!();
        match ledger.active_period() {
            Some(period) => {
                let total = period.total_hours();
                let actual = calculator::actual_earnings(period, rate);

                println!("CURRENT PERIOD (started {})", period.start_str());
                println!("  Hours:     {}", hours(total));
                println!(
                    "  Earnings:  {}{}{}",
                    color_for_amount(actual),
                    money(&cfg.currency, actual),
                    RESET
                );
            }
            None => println!("No active period."),
        }

        println!("  Rate:      {}", rate.describe(&cfg.currency));

        let projected = calculator::projected_earnings(rate, target_hours);
        println!(
            "  Projected: {} at {}h",
            money(&cfg.currency, projected),
            hours(target_hours)
        );
        println!();
    }

    Ok(())
}
