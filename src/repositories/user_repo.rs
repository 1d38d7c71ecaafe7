//! User repository for async database operations.
//!
//! Provides CRUD for the users table plus the account-removal cascade,
//! which must delete dependent rows before the user row because the
//! storage layer defines no ON DELETE CASCADE.

use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewUser, UpdateUser, User};

/// User repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap.
#[derive(Clone)]
pub struct UserRepository {
    pool: AsyncDbPool,
}

impl UserRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a new user. A duplicate email surfaces as
    /// `AppError::Duplicate` via the unique constraint on users.email.
    pub async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(users)
            .values(&new_user)
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a user by their ID.
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        users
            .filter(id.eq(user_id))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Finds a user by their email address.
    pub async fn find_by_email(&self, user_email: &str) -> Result<Option<User>, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        users
            .filter(email.eq(user_email))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Updates a user's profile fields (None fields are ignored).
    pub async fn update(&self, user_id: i32, update_data: UpdateUser) -> Result<User, AppError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(users.filter(id.eq(user_id)))
            .set(&update_data)
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a user together with every row that references them.
    ///
    /// Order inside the transaction, children first:
    /// 1. bookings made by the user as renter
    /// 2. reviews written by the user
    /// 3. bookings, availability, and reviews on spots owned by the user
    /// 4. the spots themselves
    /// 5. the user row
    ///
    /// Every referencing table must be cleared before its parent or the
    /// parent delete aborts on its foreign keys.
    ///
    /// Returns `true` when the user row existed.
    pub async fn delete_cascade(&self, target_user_id: i32) -> Result<bool, AppError> {
        use crate::schema::{availability, bookings, camping_spots, reviews, users};

        let mut conn = self.pool.get().await?;

        let deleted = conn
            .transaction::<_, AppError, _>(move |conn| {
                async move {
                    diesel::delete(bookings::table.filter(bookings::user_id.eq(target_user_id)))
                        .execute(conn)
                        .await?;

                    diesel::delete(reviews::table.filter(reviews::user_id.eq(target_user_id)))
                        .execute(conn)
                        .await?;

                    let owned_spot_ids: Vec<i32> = camping_spots::table
                        .filter(camping_spots::owner_id.eq(target_user_id))
                        .select(camping_spots::id)
                        .load(conn)
                        .await?;

                    if !owned_spot_ids.is_empty() {
                        diesel::delete(
                            bookings::table
                                .filter(bookings::camping_spot_id.eq_any(&owned_spot_ids)),
                        )
                        .execute(conn)
                        .await?;

                        diesel::delete(
                            availability::table
                                .filter(availability::camping_spot_id.eq_any(&owned_spot_ids)),
                        )
                        .execute(conn)
                        .await?;

                        diesel::delete(
                            reviews::table
                                .filter(reviews::camping_spot_id.eq_any(&owned_spot_ids)),
                        )
                        .execute(conn)
                        .await?;

                        diesel::delete(
                            camping_spots::table.filter(camping_spots::owner_id.eq(target_user_id)),
                        )
                        .execute(conn)
                        .await?;
                    }

                    let affected =
                        diesel::delete(users::table.filter(users::id.eq(target_user_id)))
                            .execute(conn)
                            .await?;

                    Ok(affected > 0)
                }
                .scope_boxed()
            })
            .await?;

        Ok(deleted)
    }
}
