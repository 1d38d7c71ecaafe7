//! Availability calendar handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use serde::Serialize;

use crate::api::dto::{AvailabilityEntryResponse, SetAvailabilityRequest};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;

/// Response body after upserting a calendar batch.
#[derive(Debug, Serialize)]
pub struct SetAvailabilityResponse {
    pub message: String,
    pub updated: usize,
}

/// Creates the availability routes
///
/// # Routes
/// - `GET /{spot_id}` - Public calendar of a spot
/// - `POST /{spot_id}` - Owner-only batch upsert
pub fn availability_routes() -> Router<AppState> {
    Router::new()
        .route("/{spot_id}", get(get_calendar))
        .route("/{spot_id}", post(set_calendar))
}

/// GET /api/availability/{spot_id} - Calendar entries
///
/// Only explicitly set dates are returned; a date with no entry carries
/// no availability statement.
async fn get_calendar(
    State(state): State<AppState>,
    Path(spot_id): Path<i32>,
) -> AppResult<Json<Vec<AvailabilityEntryResponse>>> {
    let entries = state.services.availability.get_calendar(spot_id).await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

/// POST /api/availability/{spot_id} - Set calendar entries
///
/// The whole batch upserts in one transaction; re-submitting the same
/// batch is a no-op at the calendar level.
async fn set_calendar(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(spot_id): Path<i32>,
    Json(payload): Json<SetAvailabilityRequest>,
) -> AppResult<Json<SetAvailabilityResponse>> {
    let updated = state
        .services
        .availability
        .set_calendar(
            spot_id,
            auth_user.user_id,
            auth_user.is_owner,
            payload.into_entries(),
        )
        .await?;

    Ok(Json(SetAvailabilityResponse {
        message: "Availability updated".to_string(),
        updated,
    }))
}
