use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_RATE: f64 = 7.00;
pub const DEFAULT_AVG_TIP_RATE: f64 = 23.15;

/// The configured wage model.
///
/// `avg_tip_rate` is kept even while `include_tips` is off, so re-enabling
/// tips restores the previous value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateConfig {
    pub base_rate: f64,
    pub include_tips: bool,
    pub avg_tip_rate: f64,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            base_rate: DEFAULT_BASE_RATE,
            include_tips: false,
            avg_tip_rate: DEFAULT_AVG_TIP_RATE,
        }
    }
}

impl RateConfig {
    /// Validated constructor. Rates must be non-negative; rejected values
    /// leave the previously installed configuration untouched.
    pub fn new(base_rate: f64, include_tips: bool, avg_tip_rate: f64) -> AppResult<Self> {
        if base_rate < 0.0 {
            return Err(AppError::InvalidRate(format!(
                "base rate cannot be negative: {}",
                base_rate
            )));
        }
        if avg_tip_rate < 0.0 {
            return Err(AppError::InvalidRate(format!(
                "tip rate cannot be negative: {}",
                avg_tip_rate
            )));
        }

        Ok(Self {
            base_rate,
            include_tips,
            avg_tip_rate,
        })
    }

    pub fn effective_hourly_rate(&self) -> f64 {
        if self.include_tips {
            self.base_rate + self.avg_tip_rate
        } else {
            self.base_rate
        }
    }

    /// One-line description used by `status`, `rates` and exports.
    pub fn describe(&self, currency: &str) -> String {
        if self.include_tips {
            format!(
                "{c}{:.2}/hr ({c}{:.2} base + {c}{:.2} avg tips)",
                self.effective_hourly_rate(),
                self.base_rate,
                self.avg_tip_rate,
                c = currency
            )
        } else {
            format!(
                "{c}{:.2}/hr (tips excluded)",
                self.effective_hourly_rate(),
                c = currency
            )
        }
    }
}
