//! User-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::User;
use crate::services::ProfileUpdate;

/// Request body for updating the bearer's profile. Name and email are
/// required; a blank or absent password leaves the credential unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, max = 128, message = "Password must be between 6 and 128 characters"))]
    pub password: Option<String>,
}

impl UpdateProfileRequest {
    pub fn into_profile_update(self) -> ProfileUpdate {
        ProfileUpdate {
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}

/// Response body for user data (excludes the credential hash).
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub is_owner: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            is_owner: user.is_owner,
        }
    }
}
