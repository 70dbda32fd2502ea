//! Plain-text rendering of the full ledger state. Pure function of the data
//! passed in; the generation timestamp is supplied by the caller.

use crate::core::calculator;
use crate::models::{period::Period, rate_config::RateConfig};
use crate::utils::formatting::{hours, money};

/// Header block plus one CSV-style row per entry, followed by per-period
/// totals.
pub fn render_text(
    periods: &[Period],
    rate: &RateConfig,
    currency: &str,
    generated_at: &str,
) -> String {
    let mut out = Vec::new();

    out.push("LedgerFlow Data Export".to_string());
    out.push(format!("Generated: {}", generated_at));
    out.push(format!("Rate: {}", rate.describe(currency)));
    out.push("=".repeat(50));
    out.push("Period,Date,Hours,Note,Logged_At".to_string());

    for period in periods {
        for entry in &period.entries {
            out.push(format!(
                "{},{},{},{},{}",
                period.start_str(),
                entry.date_str(),
                entry.hours,
                entry.note.clone().unwrap_or_default(),
                entry.created_at,
            ));
        }
    }

    if periods.iter().any(|p| !p.entries.is_empty()) {
        out.push(String::new());
        out.push("Totals per period:".to_string());
        for period in periods {
            let span = match period.end_date {
                Some(end) => format!("{} to {}", period.start_str(), end.format("%Y-%m-%d")),
                None => format!("{} (active)", period.start_str()),
            };
            out.push(format!(
                "  {}: {}h, {}",
                span,
                hours(period.total_hours()),
                money(currency, calculator::actual_earnings(period, rate)),
            ));
        }
    }

    out.join("\n")
}
