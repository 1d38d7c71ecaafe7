//! Authentication handlers for registration, login and token refresh.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use validator::Validate;

use crate::api::dto::{
    AuthResponse, LoginRequest, RefreshTokenRequest, RefreshTokenResponse, RegisterRequest,
};
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::utils::jwt::{generate_token_pair, validate_refresh_token};

/// Creates the authentication routes
///
/// # Routes
/// - `POST /register` - Register new account and get tokens
/// - `POST /login` - Authenticate and get tokens
/// - `POST /refresh` - Refresh access token using refresh token
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/refresh", post(refresh_token))
}

/// POST /api/auth/register - Register new account
///
/// Creates the account (password is hashed by the service) and returns
/// the profile with a fresh token pair.
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    payload.validate()?;

    let user = state
        .services
        .users
        .register(payload.into_registration())
        .await?;

    let (access_token, refresh_token) = generate_token_pair(
        user.id,
        user.email.clone(),
        user.is_owner,
        &state.jwt_config.secret,
        state.jwt_config.access_token_expiration,
        state.jwt_config.refresh_token_expiration,
    )?;

    let response = AuthResponse {
        user: user.into(),
        access_token,
        refresh_token,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/login - Authenticate
///
/// Verifies the credentials and returns a token pair. Unknown email and
/// wrong password produce the same 401.
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = state
        .services
        .users
        .authenticate(&payload.email, &payload.password)
        .await?;

    let (access_token, refresh_token) = generate_token_pair(
        user.id,
        user.email.clone(),
        user.is_owner,
        &state.jwt_config.secret,
        state.jwt_config.access_token_expiration,
        state.jwt_config.refresh_token_expiration,
    )?;

    let response = AuthResponse {
        user: user.into(),
        access_token,
        refresh_token,
    };

    Ok(Json(response))
}

/// POST /api/auth/refresh - Refresh access token
///
/// Validates the refresh token, re-checks that the account still exists,
/// and issues a new token pair.
async fn refresh_token(
    State(state): State<AppState>,
    Json(payload): Json<RefreshTokenRequest>,
) -> AppResult<Json<RefreshTokenResponse>> {
    let claims = validate_refresh_token(&payload.refresh_token, &state.jwt_config.secret)?;

    let user_id: i32 = claims.sub.parse().map_err(|_| AppError::Unauthorized {
        message: "Invalid user ID in token".to_string(),
    })?;

    let user = state.services.users.get_user(user_id).await?;

    let (access_token, refresh_token) = generate_token_pair(
        user.id,
        user.email,
        user.is_owner,
        &state.jwt_config.secret,
        state.jwt_config.access_token_expiration,
        state.jwt_config.refresh_token_expiration,
    )?;

    Ok(Json(RefreshTokenResponse {
        access_token,
        refresh_token,
    }))
}
