//! Availability calendar repository.

use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{AvailabilityEntry, NewAvailabilityEntry};

/// Availability repository holding an async connection pool.
#[derive(Clone)]
pub struct AvailabilityRepository {
    pool: AsyncDbPool,
}

impl AvailabilityRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Lists all calendar entries for a spot.
    pub async fn list_for_spot(&self, spot: i32) -> Result<Vec<AvailabilityEntry>, AppError> {
        use crate::schema::availability::dsl::*;
        let mut conn = self.pool.get().await?;

        availability
            .filter(camping_spot_id.eq(spot))
            .order(date.asc())
            .select(AvailabilityEntry::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Upserts a batch of entries keyed on (camping_spot_id, date).
    ///
    /// A single multi-row INSERT .. ON CONFLICT DO UPDATE statement, so the
    /// whole batch commits or none of it does. Re-running the same batch
    /// leaves the calendar unchanged.
    pub async fn upsert_batch(
        &self,
        entries: Vec<NewAvailabilityEntry>,
    ) -> Result<usize, AppError> {
        use crate::schema::availability::dsl::*;

        if entries.is_empty() {
            return Ok(0);
        }

        let mut conn = self.pool.get().await?;

        diesel::insert_into(availability)
            .values(&entries)
            .on_conflict((camping_spot_id, date))
            .do_update()
            .set(is_available.eq(excluded(is_available)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
