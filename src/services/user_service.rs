//! User service for registration, authentication, and profile management.

use crate::error::{AppError, AppResult};
use crate::models::{NewUser, UpdateUser, User};
use crate::repositories::UserRepository;
use crate::utils::password::{hash_password, verify_password};

/// Plain-text registration input; the service hashes the password before
/// it reaches the repository.
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub is_owner: bool,
}

/// Profile update input. Name and email are required; a new password is
/// optional and re-hashed when present.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
}

/// User service for handling user-related business logic.
#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    /// Registers a new user. A duplicate email surfaces as a 409 Duplicate
    /// from the unique constraint.
    pub async fn register(&self, input: Registration) -> AppResult<User> {
        let hashed = hash_password(&input.password)?;
        self.repo
            .create(NewUser {
                name: input.name,
                email: input.email,
                password: hashed,
                is_owner: input.is_owner,
            })
            .await
    }

    /// Verifies credentials and returns the matching user.
    ///
    /// A missing user and a wrong password produce the same error so the
    /// response does not reveal which emails are registered.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let invalid = || AppError::Unauthorized {
            message: "Invalid credentials".to_string(),
        };

        let user = self.repo.find_by_email(email).await?.ok_or_else(invalid)?;

        if !verify_password(password, &user.password)? {
            return Err(invalid());
        }

        Ok(user)
    }

    /// Gets a user by ID, or `NotFound`.
    pub async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound {
            entity: "user".to_string(),
            field: "id".to_string(),
            value: id.to_string(),
        })
    }

    /// Updates the bearer's profile. Only re-hashes when a non-blank new
    /// password was supplied.
    pub async fn update_profile(&self, id: i32, input: ProfileUpdate) -> AppResult<User> {
        self.get_user(id).await?;

        let password = match input.password.as_deref() {
            Some(p) if !p.trim().is_empty() => Some(hash_password(p)?),
            _ => None,
        };

        self.repo
            .update(
                id,
                UpdateUser {
                    name: Some(input.name),
                    email: Some(input.email),
                    password,
                },
            )
            .await
    }

    /// Deletes the user's account and every row that references it:
    /// own bookings, owned spots, and those spots' bookings and calendars.
    pub async fn delete_account(&self, id: i32) -> AppResult<()> {
        let deleted = self.repo.delete_cascade(id).await?;
        if !deleted {
            return Err(AppError::NotFound {
                entity: "user".to_string(),
                field: "id".to_string(),
                value: id.to_string(),
            });
        }
        Ok(())
    }
}
