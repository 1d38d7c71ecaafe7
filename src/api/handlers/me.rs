//! Handlers for the bearer's own profile.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, put},
};
use validator::Validate;

use crate::api::dto::{UpdateProfileRequest, UserResponse};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;

/// Creates the profile routes
///
/// # Routes
/// - `GET /` - Bearer's profile
/// - `PUT /` - Update name/email, optionally rotate the password
/// - `DELETE /` - Delete the account and everything it owns
pub fn me_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_profile))
        .route("/", put(update_profile))
        .route("/", delete(delete_account))
}

/// GET /api/me - Bearer's profile
async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<UserResponse>> {
    let user = state.services.users.get_user(auth_user.user_id).await?;
    Ok(Json(user.into()))
}

/// PUT /api/me - Update profile
///
/// Name and email are required. A blank or absent password leaves the
/// credential unchanged.
async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> AppResult<Json<UserResponse>> {
    payload.validate()?;

    let user = state
        .services
        .users
        .update_profile(auth_user.user_id, payload.into_profile_update())
        .await?;

    Ok(Json(user.into()))
}

/// DELETE /api/me - Delete account
///
/// Removes the bearer's bookings, the bookings and availability of every
/// spot they own, their spots, and finally the account itself, all in one
/// transaction.
async fn delete_account(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<StatusCode> {
    state
        .services
        .users
        .delete_account(auth_user.user_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
