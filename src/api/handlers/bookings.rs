//! Booking ledger handlers.
//!
//! Creation runs the full conflict check (duplicate renter booking,
//! blocked calendar dates, overlapping ranges) inside one serializable
//! transaction in the repository layer.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};

use crate::api::dto::{BookingCreatedResponse, BookingRangeResponse, BookingResponse, CreateBookingRequest};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;

/// Creates the booking routes
///
/// # Routes
/// - `POST /` - Book a spot (bearer)
/// - `GET /` - Bearer's bookings with spot summaries
/// - `GET /{id}` - Public booked ranges of a spot (the id is a spot id)
/// - `DELETE /{id}` - Cancel a booking owned by the bearer
pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_booking))
        .route("/", get(list_bookings))
        // GET takes a spot id, DELETE a booking id; they must share one
        // path parameter name for the router to accept both.
        .route("/{id}", get(list_spot_ranges))
        .route("/{id}", delete(delete_booking))
}

/// POST /api/bookings - Book a spot
///
/// Rejected with 400 when the bearer already booked this spot, when an
/// explicitly blocked date falls inside the range (the offending dates are
/// returned), or when another booking overlaps the range inclusively.
async fn create_booking(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(payload): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingCreatedResponse>)> {
    let booking = state
        .services
        .bookings
        .create_booking(
            auth_user.user_id,
            payload.camping_spot_id,
            payload.start_date,
            payload.end_date,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into())))
}

/// GET /api/bookings - Bearer's bookings
async fn list_bookings(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<BookingResponse>>> {
    let bookings = state
        .services
        .bookings
        .list_for_user(auth_user.user_id)
        .await?;
    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

/// GET /api/bookings/{spot_id} - Public booked ranges
///
/// Raw date ranges only, with no renter information.
async fn list_spot_ranges(
    State(state): State<AppState>,
    Path(spot_id): Path<i32>,
) -> AppResult<Json<Vec<BookingRangeResponse>>> {
    let ranges = state.services.bookings.list_for_spot(spot_id).await?;
    Ok(Json(ranges.into_iter().map(Into::into).collect()))
}

/// DELETE /api/bookings/{id} - Cancel a booking
///
/// A booking that does not exist or is not the bearer's answers 404
/// either way.
async fn delete_booking(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state
        .services
        .bookings
        .delete_booking(id, auth_user.user_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
