//! Earnings math: pure functions over a period and a rate configuration.
//! Deterministic, no hidden state; full f64 precision is kept internally and
//! rounding happens only at display time.

use crate::models::{period::Period, rate_config::RateConfig};

pub fn actual_earnings(period: &Period, rate: &RateConfig) -> f64 {
    period.total_hours() * rate.effective_hourly_rate()
}

/// Earnings at `target_hours` under the given rates. A non-positive target
/// yields 0.0 so the projection display degrades gracefully with no data.
pub fn projected_earnings(rate: &RateConfig, target_hours: f64) -> f64 {
    if target_hours <= 0.0 {
        return 0.0;
    }
    target_hours * rate.effective_hourly_rate()
}
