//! Authentication DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::UserResponse;
use crate::services::Registration;

/// Request body for registering a new account.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, max = 128, message = "Password must be between 6 and 128 characters"))]
    pub password: String,
    /// Whether the account may create and manage spots.
    #[serde(default)]
    pub is_owner: bool,
}

impl RegisterRequest {
    pub fn into_registration(self) -> Registration {
        Registration {
            name: self.name,
            email: self.email,
            password: self.password,
            is_owner: self.is_owner,
        }
    }
}

/// Request body for logging in.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for refreshing an access token.
#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Response body after login or registration.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// Response body after a token refresh.
#[derive(Debug, Serialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}
