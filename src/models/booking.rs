use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::Deserialize;

/// Booking row: a renter holding an inclusive date range on a spot.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::bookings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub camping_spot_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

/// NewBooking model, inserted only by the conflict resolver after all
/// checks pass.
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::bookings)]
pub struct NewBooking {
    pub user_id: i32,
    pub camping_spot_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Booking joined with spot summary fields for the renter's listing.
#[derive(Debug, Queryable, Clone)]
pub struct BookingWithSpot {
    pub id: i32,
    pub title: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Raw date range of a booking, publicly readable per spot.
#[derive(Debug, Queryable, Clone, PartialEq, Eq)]
pub struct BookingRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
