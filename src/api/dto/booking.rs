//! Booking DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Booking, BookingRange, BookingWithSpot};

/// Request body for booking a spot. All three fields are required;
/// deserialization rejects a body missing any of them.
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub camping_spot_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Response body after a successful booking.
#[derive(Debug, Serialize)]
pub struct BookingCreatedResponse {
    pub message: String,
    pub booking_id: i32,
}

impl From<Booking> for BookingCreatedResponse {
    fn from(booking: Booking) -> Self {
        Self {
            message: "Booking created".to_string(),
            booking_id: booking.id,
        }
    }
}

/// A renter's booking joined with spot summary fields.
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: i32,
    pub title: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<BookingWithSpot> for BookingResponse {
    fn from(b: BookingWithSpot) -> Self {
        Self {
            id: b.id,
            title: b.title,
            location: b.location,
            start_date: b.start_date,
            end_date: b.end_date,
        }
    }
}

/// Publicly visible booked range of a spot.
#[derive(Debug, Serialize)]
pub struct BookingRangeResponse {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<BookingRange> for BookingRangeResponse {
    fn from(r: BookingRange) -> Self {
        Self {
            start_date: r.start_date,
            end_date: r.end_date,
        }
    }
}
