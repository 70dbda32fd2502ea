use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { limit, all } = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        let ledger = Ledger::load(store);

        if *all {
            if ledger.periods().is_empty() {
                info("No periods recorded yet.");
                return Ok(());
            }

            for period in ledger.periods() {
                let span = match period.end_date {
                    Some(end) => format!("{} to {}", period.start_str(), end.format("%Y-%m-%d")),
                    None => format!("{} (active)", period.start_str()),
                };
                println!("\n📅 Period {}", span);

                if period.entries.is_empty() {
                    println!("  (no entries)");
                    continue;
                }
                print!("{}", entries_table(period.entries.iter()));
            }
            return Ok(());
        }

        let limit = limit.unwrap_or(cfg.recent_limit);
        let entries = ledger.recent_entries(limit);

        if entries.is_empty() {
            info("No entries in the active period yet.");
        } else {
            print!("{}", entries_table(entries.into_iter()));
        }
    }

    Ok(())
}

fn entries_table<'a>(entries: impl Iterator<Item = &'a Entry>) -> String {
    let mut table = Table::new(vec!["Date", "Hours", "Note"]);
    for entry in entries {
        table.add_row(vec![
            entry.date_str(),
            format!("{:.1}", entry.hours),
            entry.note.clone().unwrap_or_default(),
        ]);
    }
    table.render()
}
