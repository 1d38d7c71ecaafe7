use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Token type enumeration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Access token for API authentication (short-lived)
    Access,
    /// Refresh token for obtaining new access tokens (long-lived)
    Refresh,
}

/// JWT Claims structure containing the principal and token metadata
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// User email
    pub email: String,
    /// Whether the user may create and manage spots
    pub is_owner: bool,
    /// Token type (access or refresh)
    pub token_type: TokenType,
    /// Issued at (timestamp)
    pub iat: i64,
    /// Expiration time (timestamp)
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a user
    pub fn new(
        user_id: i32,
        email: String,
        is_owner: bool,
        token_type: TokenType,
        expiration_hours: i64,
    ) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: user_id.to_string(),
            email,
            is_owner,
            token_type,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }
}

/// Generates a signed JWT token for a user.
pub fn generate_token(
    user_id: i32,
    email: String,
    is_owner: bool,
    token_type: TokenType,
    secret: &str,
    expiration_hours: i64,
) -> AppResult<String> {
    let claims = Claims::new(user_id, email, is_owner, token_type, expiration_hours);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal {
        source: anyhow::anyhow!("Failed to generate JWT token: {}", e),
    })
}

/// Generates both access and refresh tokens.
///
/// Returns a tuple of (access_token, refresh_token).
pub fn generate_token_pair(
    user_id: i32,
    email: String,
    is_owner: bool,
    secret: &str,
    access_expiration_hours: i64,
    refresh_expiration_hours: i64,
) -> AppResult<(String, String)> {
    let access_token = generate_token(
        user_id,
        email.clone(),
        is_owner,
        TokenType::Access,
        secret,
        access_expiration_hours,
    )?;

    let refresh_token = generate_token(
        user_id,
        email,
        is_owner,
        TokenType::Refresh,
        secret,
        refresh_expiration_hours,
    )?;

    Ok((access_token, refresh_token))
}

/// Validates and decodes a JWT token, optionally enforcing its type.
pub fn validate_token(
    token: &str,
    secret: &str,
    expected_type: Option<TokenType>,
) -> AppResult<Claims> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| AppError::Unauthorized {
        message: format!("Invalid token: {}", e),
    })?
    .claims;

    if let Some(expected) = expected_type {
        if claims.token_type != expected {
            return Err(AppError::Unauthorized {
                message: "Invalid token type".to_string(),
            });
        }
    }

    Ok(claims)
}

/// Validates an access token.
pub fn validate_access_token(token: &str, secret: &str) -> AppResult<Claims> {
    validate_token(token, secret, Some(TokenType::Access))
}

/// Validates a refresh token.
pub fn validate_refresh_token(token: &str, secret: &str) -> AppResult<Claims> {
    validate_token(token, secret, Some(TokenType::Refresh))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret_key_at_least_32_characters_long";

    #[test]
    fn generated_access_token_round_trips() {
        let token = generate_token(
            7,
            "owner@example.com".to_string(),
            true,
            TokenType::Access,
            SECRET,
            2,
        )
        .unwrap();

        let claims = validate_access_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.email, "owner@example.com");
        assert!(claims.is_owner);
    }

    #[test]
    fn refresh_token_rejected_as_access_token() {
        let token = generate_token(
            7,
            "renter@example.com".to_string(),
            false,
            TokenType::Refresh,
            SECRET,
            168,
        )
        .unwrap();

        assert!(validate_access_token(&token, SECRET).is_err());
    }

    #[test]
    fn token_with_wrong_secret_is_rejected() {
        let token = generate_token(
            7,
            "renter@example.com".to_string(),
            false,
            TokenType::Access,
            SECRET,
            2,
        )
        .unwrap();

        assert!(validate_access_token(&token, "another_secret_of_32_characters!!").is_err());
    }

    #[test]
    fn token_pair_has_distinct_types() {
        let (access, refresh) =
            generate_token_pair(1, "u@example.com".to_string(), false, SECRET, 2, 168).unwrap();

        assert!(validate_access_token(&access, SECRET).is_ok());
        assert!(validate_refresh_token(&refresh, SECRET).is_ok());
        assert!(validate_refresh_token(&access, SECRET).is_err());
    }
}
