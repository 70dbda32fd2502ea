pub mod initialize;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod stats;
pub mod store;

pub use store::SqliteStore;

use crate::errors::AppResult;
use crate::models::{entry::Entry, period::Period, rate_config::RateConfig};

/// Durable storage consumed by the Ledger.
///
/// Contract: every call is atomic (it either fully applies or has no effect
/// observable on reload) and durable before it returns. Failed writes map to
/// `AppError::Persistence`.
pub trait PersistenceGateway {
    /// Load every period (entries included, insertion order) together with
    /// the saved rate configuration.
    fn load_all(&mut self) -> AppResult<(Vec<Period>, RateConfig)>;

    /// Persist one entry under `period_id`, returning the assigned id.
    fn save_entry(&mut self, period_id: i64, entry: &Entry) -> AppResult<i64>;

    /// Persist a period transition in one shot: close `closing` (when
    /// present) and insert `opening` as the new active period. Returns the id
    /// assigned to the opened period.
    fn save_period_boundary(
        &mut self,
        closing: Option<&Period>,
        opening: &Period,
    ) -> AppResult<i64>;

    fn save_rate_config(&mut self, rate: &RateConfig) -> AppResult<()>;

    /// Drop all stored data; the next `load_all` yields an empty ledger.
    fn clear(&mut self) -> AppResult<()>;
}
