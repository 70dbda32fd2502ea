//! `PersistenceGateway` backed by SQLite.
//!
//! Write-path errors are mapped to `AppError::Persistence` so callers can
//! treat them uniformly as "durable write failed, retry later".

use crate::db::PersistenceGateway;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{entry::Entry, period::Period, rate_config::RateConfig};

pub struct SqliteStore {
    pool: DbPool,
}

fn to_persistence(e: AppError) -> AppError {
    match e {
        AppError::Persistence(_) => e,
        other => AppError::Persistence(other.to_string()),
    }
}

impl SqliteStore {
    /// Open (or create) the database at `path` and bring the schema up to
    /// date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)
            .map_err(|e| AppError::Persistence(format!("cannot open database: {}", e)))?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &rusqlite::Connection {
        &self.pool.conn
    }
}

impl PersistenceGateway for SqliteStore {
    fn load_all(&mut self) -> AppResult<(Vec<Period>, RateConfig)> {
        let periods = queries::load_periods(&self.pool.conn)?;
        let rate = queries::load_rate_config(&self.pool.conn)?.unwrap_or_default();
        Ok((periods, rate))
    }

    fn save_entry(&mut self, period_id: i64, entry: &Entry) -> AppResult<i64> {
        queries::insert_entry(&self.pool.conn, period_id, entry).map_err(to_persistence)
    }

    fn save_period_boundary(
        &mut self,
        closing: Option<&Period>,
        opening: &Period,
    ) -> AppResult<i64> {
        let tx = self
            .pool
            .conn
            .transaction()
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        let id = (|| -> AppResult<i64> {
            if let Some(closed) = closing {
                queries::update_period_end(&tx, closed)?;
            }
            let id = queries::insert_period(&tx, opening)?;
            queries::save_setting(&tx, queries::KEY_ACTIVE_PERIOD, &id.to_string())?;
            Ok(id)
        })()
        .map_err(to_persistence)?;

        tx.commit()
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        Ok(id)
    }

    fn save_rate_config(&mut self, rate: &RateConfig) -> AppResult<()> {
        let json = serde_json::to_string(rate)
            .map_err(|e| AppError::Persistence(e.to_string()))?;
        queries::save_setting(&self.pool.conn, queries::KEY_RATE_CONFIG, &json)
            .map_err(to_persistence)
    }

    fn clear(&mut self) -> AppResult<()> {
        self.pool
            .conn
            .execute_batch(
                "BEGIN;
                 DELETE FROM entries;
                 DELETE FROM periods;
                 DELETE FROM settings;
                 COMMIT;",
            )
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        // Shrink the file after a full wipe; failure here is harmless.
        let _ = self.pool.conn.execute_batch("VACUUM;");

        Ok(())
    }
}
