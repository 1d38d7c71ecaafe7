//! Camping spot listing handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use validator::Validate;

use crate::api::dto::{CreateSpotRequest, SpotQuery, SpotResponse, UpdateSpotRequest};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;

/// Creates the spot routes
///
/// # Routes
/// - `GET /` - Public listing with optional filters
/// - `GET /{id}` - Public detail
/// - `POST /` - Owner-only creation
/// - `GET /owner/mine` - Owner's own listings
/// - `PUT /{id}` - Owner-only partial update
/// - `DELETE /{id}` - Owner-only cascading delete
pub fn spot_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_spots))
        .route("/", post(create_spot))
        .route("/owner/mine", get(list_own_spots))
        .route("/{id}", get(get_spot))
        .route("/{id}", put(update_spot))
        .route("/{id}", delete(delete_spot))
}

/// GET /api/spots - Public listing
///
/// Filters: location substring (case-insensitive), price bounds, and a
/// date window that hides spots with a booking overlapping it.
async fn list_spots(
    State(state): State<AppState>,
    Query(query): Query<SpotQuery>,
) -> AppResult<Json<Vec<SpotResponse>>> {
    let spots = state.services.spots.list_spots(query.into_filter()).await?;
    Ok(Json(spots.into_iter().map(Into::into).collect()))
}

/// GET /api/spots/{id} - Public detail
async fn get_spot(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<SpotResponse>> {
    let spot = state.services.spots.get_spot(id).await?;
    Ok(Json(spot.into()))
}

/// POST /api/spots - Create listing (owners only)
async fn create_spot(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(payload): Json<CreateSpotRequest>,
) -> AppResult<(StatusCode, Json<SpotResponse>)> {
    payload.validate()?;

    let spot = state
        .services
        .spots
        .create_spot(auth_user.is_owner, payload.into_new_spot(auth_user.user_id))
        .await?;

    Ok((StatusCode::CREATED, Json(spot.into())))
}

/// GET /api/spots/owner/mine - Owner's own listings
async fn list_own_spots(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<SpotResponse>>> {
    let spots = state
        .services
        .spots
        .list_owner_spots(auth_user.user_id, auth_user.is_owner)
        .await?;
    Ok(Json(spots.into_iter().map(Into::into).collect()))
}

/// PUT /api/spots/{id} - Update listing
///
/// Absent fields keep their current values. A spot that does not exist or
/// is not the bearer's answers 404 either way.
async fn update_spot(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSpotRequest>,
) -> AppResult<Json<SpotResponse>> {
    let spot = state
        .services
        .spots
        .update_spot(
            id,
            auth_user.user_id,
            auth_user.is_owner,
            payload.into_update_spot(),
        )
        .await?;

    Ok(Json(spot.into()))
}

/// DELETE /api/spots/{id} - Delete listing
///
/// Transactionally removes the spot's bookings and availability entries
/// along with the spot itself.
async fn delete_spot(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state
        .services
        .spots
        .delete_spot(id, auth_user.user_id, auth_user.is_owner)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
