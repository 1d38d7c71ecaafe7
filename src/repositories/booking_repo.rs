//! Booking ledger repository.
//!
//! Holds the check-then-act reservation sequence. The eligibility checks
//! (renter not already holding a booking for the spot, no blocked calendar
//! dates, no overlapping range) and the insert run inside one serializable
//! transaction, otherwise two concurrent requests for overlapping ranges on
//! the same spot could both pass validation before either inserts.

use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::RunQueryDsl;

use crate::booking_rules::{self, DateRange};
use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{AvailabilityEntry, Booking, BookingRange, BookingWithSpot, NewBooking};

/// Booking repository holding an async connection pool.
#[derive(Clone)]
pub struct BookingRepository {
    pool: AsyncDbPool,
}

impl BookingRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Attempts to reserve a range, running all conflict checks and the
    /// insert in a single serializable transaction.
    ///
    /// Check order (first failure wins):
    /// 1. the renter must not hold any existing booking for this spot,
    ///    regardless of dates
    /// 2. no date in the range may carry an explicit unavailable flag
    /// 3. no existing booking for the spot may overlap the range,
    ///    touching endpoints included
    pub async fn reserve(&self, new_booking: NewBooking) -> Result<Booking, AppError> {
        use crate::schema::{availability, bookings};

        let range = DateRange::new(new_booking.start_date, new_booking.end_date).ok_or_else(
            || AppError::Validation {
                field: "end_date".to_string(),
                reason: "end date must not precede start date".to_string(),
            },
        )?;

        let mut conn = self.pool.get().await?;

        let booking = conn
            .build_transaction()
            .serializable()
            .run(move |conn| {
                async move {
                    let renter = new_booking.user_id;
                    let spot = new_booking.camping_spot_id;

                    let already_booked: Option<i32> = bookings::table
                        .filter(
                            bookings::user_id
                                .eq(renter)
                                .and(bookings::camping_spot_id.eq(spot)),
                        )
                        .select(bookings::id)
                        .first(conn)
                        .await
                        .optional()?;

                    if already_booked.is_some() {
                        return Err(AppError::conflict(
                            "You have already booked this camping spot",
                        ));
                    }

                    let entries: Vec<AvailabilityEntry> = availability::table
                        .filter(
                            availability::camping_spot_id
                                .eq(spot)
                                .and(availability::date.between(range.start, range.end)),
                        )
                        .select(AvailabilityEntry::as_select())
                        .load(conn)
                        .await?;

                    let blocked = booking_rules::blocked_dates(&entries, range);
                    if !blocked.is_empty() {
                        return Err(AppError::BookingConflict {
                            message: "Some dates are unavailable for booking".to_string(),
                            blocked_dates: blocked,
                        });
                    }

                    let existing: Vec<BookingRange> = bookings::table
                        .filter(bookings::camping_spot_id.eq(spot))
                        .select((bookings::start_date, bookings::end_date))
                        .load(conn)
                        .await?;

                    if booking_rules::has_overlap(&existing, range) {
                        return Err(AppError::conflict(
                            "This spot is already booked during the selected dates",
                        ));
                    }

                    diesel::insert_into(bookings::table)
                        .values(&new_booking)
                        .returning(Booking::as_returning())
                        .get_result(conn)
                        .await
                        .map_err(AppError::from)
                }
                .scope_boxed()
            })
            .await?;

        Ok(booking)
    }

    /// Lists a renter's bookings joined with spot summary fields.
    pub async fn list_for_user(&self, renter: i32) -> Result<Vec<BookingWithSpot>, AppError> {
        use crate::schema::{bookings, camping_spots};
        let mut conn = self.pool.get().await?;

        bookings::table
            .inner_join(camping_spots::table)
            .filter(bookings::user_id.eq(renter))
            .select((
                bookings::id,
                camping_spots::title,
                camping_spots::location,
                bookings::start_date,
                bookings::end_date,
            ))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists the raw booked ranges for a spot. Publicly readable.
    pub async fn list_ranges_for_spot(&self, spot: i32) -> Result<Vec<BookingRange>, AppError> {
        use crate::schema::bookings::dsl::*;
        let mut conn = self.pool.get().await?;

        bookings
            .filter(camping_spot_id.eq(spot))
            .select((start_date, end_date))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a booking only when it belongs to the requester.
    ///
    /// Returns the number of rows removed; zero covers both "absent" and
    /// "not yours", which callers must not distinguish.
    pub async fn delete_owned(&self, booking_id: i32, requester: i32) -> Result<usize, AppError> {
        use crate::schema::bookings::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(bookings.filter(id.eq(booking_id).and(user_id.eq(requester))))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
