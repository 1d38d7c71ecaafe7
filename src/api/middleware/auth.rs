//! JWT bearer authentication.
//!
//! `AuthUser` is an axum extractor: handlers that take an `AuthUser`
//! parameter require a valid access token, handlers that don't are public.
//! This keeps mixed public/protected method sets on the same path (e.g.
//! `GET /bookings/{spot_id}` public, `DELETE /bookings/{id}` protected)
//! without per-route middleware layers.

use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt::{Claims, validate_access_token};

/// Authenticated principal recovered from a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    /// User ID from JWT claims
    pub user_id: i32,
    /// User email from JWT claims
    pub email: String,
    /// Whether the user may create and manage spots
    pub is_owner: bool,
}

impl TryFrom<Claims> for AuthUser {
    type Error = AppError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let user_id = claims.sub.parse().map_err(|_| AppError::Unauthorized {
            message: "Invalid user ID in token".to_string(),
        })?;
        Ok(Self {
            user_id,
            email: claims.email,
            is_owner: claims.is_owner,
        })
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized {
                message: "Missing authorization header".to_string(),
            })?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized {
                message: "Invalid authorization header format. Expected: Bearer <token>"
                    .to_string(),
            })?;

        let claims = validate_access_token(token, &state.jwt_config.secret)?;
        AuthUser::try_from(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::jwt::TokenType;

    #[test]
    fn auth_user_from_claims() {
        let claims = Claims {
            sub: "123".to_string(),
            email: "test@example.com".to_string(),
            is_owner: true,
            token_type: TokenType::Access,
            iat: 0,
            exp: 9_999_999_999,
        };

        let auth_user = AuthUser::try_from(claims).unwrap();
        assert_eq!(auth_user.user_id, 123);
        assert_eq!(auth_user.email, "test@example.com");
        assert!(auth_user.is_owner);
    }

    #[test]
    fn auth_user_from_claims_invalid_id() {
        let claims = Claims {
            sub: "not-a-number".to_string(),
            email: "test@example.com".to_string(),
            is_owner: false,
            token_type: TokenType::Access,
            iat: 0,
            exp: 9_999_999_999,
        };

        assert!(AuthUser::try_from(claims).is_err());
    }
}
