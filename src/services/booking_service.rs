//! Booking service: the conflict resolver entrypoint and the ledger reads.

use chrono::NaiveDate;

use crate::error::{AppError, AppResult};
use crate::models::{Booking, BookingRange, BookingWithSpot, NewBooking};
use crate::repositories::BookingRepository;

/// Booking service.
#[derive(Clone)]
pub struct BookingService {
    repo: BookingRepository,
}

impl BookingService {
    pub fn new(repo: BookingRepository) -> Self {
        Self { repo }
    }

    /// Books a spot for an inclusive date range.
    ///
    /// All eligibility checks and the insert run atomically in the
    /// repository; see `BookingRepository::reserve` for the check order.
    pub async fn create_booking(
        &self,
        renter_id: i32,
        camping_spot_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<Booking> {
        self.repo
            .reserve(NewBooking {
                user_id: renter_id,
                camping_spot_id,
                start_date,
                end_date,
            })
            .await
    }

    /// Lists the bearer's bookings with spot summaries.
    pub async fn list_for_user(&self, renter_id: i32) -> AppResult<Vec<BookingWithSpot>> {
        self.repo.list_for_user(renter_id).await
    }

    /// Lists the booked ranges of a spot. No auth required.
    pub async fn list_for_spot(&self, spot_id: i32) -> AppResult<Vec<BookingRange>> {
        self.repo.list_ranges_for_spot(spot_id).await
    }

    /// Deletes a booking belonging to the requester. A booking that does
    /// not exist and one that belongs to someone else both report not
    /// found, so the response leaks nothing about other users' bookings.
    pub async fn delete_booking(&self, booking_id: i32, requester_id: i32) -> AppResult<()> {
        let affected = self.repo.delete_owned(booking_id, requester_id).await?;
        if affected == 0 {
            return Err(AppError::NotFound {
                entity: "booking".to_string(),
                field: "id".to_string(),
                value: booking_id.to_string(),
            });
        }
        Ok(())
    }
}
