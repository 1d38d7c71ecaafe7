//! Camping spot repository for async database operations.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{CampingSpot, NewCampingSpot, UpdateCampingSpot};

/// Public listing filters for the spot search endpoint.
#[derive(Debug, Clone, Default)]
pub struct SpotFilter {
    /// Case-insensitive substring match on the location field.
    pub location: Option<String>,
    pub min_price: Option<BigDecimal>,
    pub max_price: Option<BigDecimal>,
    /// When both bounds are set, spots with a booking overlapping the
    /// window (strictly, not counting touching endpoints) are excluded.
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Camping spot repository holding an async connection pool.
#[derive(Clone)]
pub struct SpotRepository {
    pool: AsyncDbPool,
}

impl SpotRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a new listing.
    pub async fn create(&self, new_spot: NewCampingSpot) -> Result<CampingSpot, AppError> {
        use crate::schema::camping_spots::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(camping_spots)
            .values(&new_spot)
            .returning(CampingSpot::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a spot by its ID.
    pub async fn find_by_id(&self, spot_id: i32) -> Result<Option<CampingSpot>, AppError> {
        use crate::schema::camping_spots::dsl::*;
        let mut conn = self.pool.get().await?;

        camping_spots
            .filter(id.eq(spot_id))
            .select(CampingSpot::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Finds a spot only when it belongs to the given owner.
    pub async fn find_by_id_and_owner(
        &self,
        spot_id: i32,
        owner: i32,
    ) -> Result<Option<CampingSpot>, AppError> {
        use crate::schema::camping_spots::dsl::*;
        let mut conn = self.pool.get().await?;

        camping_spots
            .filter(id.eq(spot_id).and(owner_id.eq(owner)))
            .select(CampingSpot::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists spots matching the public search filters.
    pub async fn list_filtered(&self, filter: SpotFilter) -> Result<Vec<CampingSpot>, AppError> {
        use crate::schema::{bookings, camping_spots};
        let mut conn = self.pool.get().await?;

        let mut query = camping_spots::table.into_boxed();

        if let Some(loc) = &filter.location {
            query = query.filter(camping_spots::location.ilike(format!("%{}%", loc)));
        }
        if let Some(min_price) = filter.min_price {
            query = query.filter(camping_spots::price.ge(min_price));
        }
        if let Some(max_price) = filter.max_price {
            query = query.filter(camping_spots::price.le(max_price));
        }
        if let (Some(start), Some(end)) = (filter.start_date, filter.end_date) {
            let booked = bookings::table
                .filter(
                    bookings::start_date
                        .lt(end)
                        .and(bookings::end_date.gt(start)),
                )
                .select(bookings::camping_spot_id);
            query = query.filter(camping_spots::id.ne_all(booked));
        }

        query
            .select(CampingSpot::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists the spots owned by a user.
    pub async fn list_by_owner(&self, owner: i32) -> Result<Vec<CampingSpot>, AppError> {
        use crate::schema::camping_spots::dsl::*;
        let mut conn = self.pool.get().await?;

        camping_spots
            .filter(owner_id.eq(owner))
            .select(CampingSpot::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Applies a partial update to a spot.
    pub async fn update(
        &self,
        spot_id: i32,
        update_data: UpdateCampingSpot,
    ) -> Result<CampingSpot, AppError> {
        use crate::schema::camping_spots::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(camping_spots.filter(id.eq(spot_id)))
            .set(&update_data)
            .returning(CampingSpot::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a spot together with its bookings, availability rows, and
    /// reviews.
    ///
    /// Children first; no ON DELETE CASCADE exists at the storage layer, so
    /// every referencing table must be cleared or the spot delete aborts on
    /// its foreign keys. Returns `true` when the spot row existed.
    pub async fn delete_cascade(&self, spot_id: i32) -> Result<bool, AppError> {
        use crate::schema::{availability, bookings, camping_spots, reviews};

        let mut conn = self.pool.get().await?;

        let deleted = conn
            .transaction::<_, AppError, _>(move |conn| {
                async move {
                    diesel::delete(
                        bookings::table.filter(bookings::camping_spot_id.eq(spot_id)),
                    )
                    .execute(conn)
                    .await?;

                    diesel::delete(
                        availability::table.filter(availability::camping_spot_id.eq(spot_id)),
                    )
                    .execute(conn)
                    .await?;

                    diesel::delete(
                        reviews::table.filter(reviews::camping_spot_id.eq(spot_id)),
                    )
                    .execute(conn)
                    .await?;

                    let affected = diesel::delete(
                        camping_spots::table.filter(camping_spots::id.eq(spot_id)),
                    )
                    .execute(conn)
                    .await?;

                    Ok(affected > 0)
                }
                .scope_boxed()
            })
            .await?;

        Ok(deleted)
    }
}
