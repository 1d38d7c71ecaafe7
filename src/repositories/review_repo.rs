//! Review repository.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewReview, Review, ReviewWithAuthor};

/// Review repository holding an async connection pool.
#[derive(Clone)]
pub struct ReviewRepository {
    pool: AsyncDbPool,
}

impl ReviewRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Finds the review a user left on a spot, if any.
    pub async fn find_by_user_and_spot(
        &self,
        reviewer: i32,
        spot: i32,
    ) -> Result<Option<Review>, AppError> {
        use crate::schema::reviews::dsl::*;
        let mut conn = self.pool.get().await?;

        reviews
            .filter(user_id.eq(reviewer).and(camping_spot_id.eq(spot)))
            .select(Review::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Inserts a first-time review.
    pub async fn create(&self, new_review: NewReview) -> Result<Review, AppError> {
        use crate::schema::reviews::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(reviews)
            .values(&new_review)
            .returning(Review::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Overwrites rating, comment, and timestamp of an existing review.
    pub async fn overwrite(
        &self,
        review_id: i32,
        new_rating: i32,
        new_comment: String,
    ) -> Result<Review, AppError> {
        use crate::schema::reviews::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(reviews.filter(id.eq(review_id)))
            .set((
                rating.eq(new_rating),
                comment.eq(new_comment),
                created_at.eq(diesel::dsl::now),
            ))
            .returning(Review::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists a spot's reviews with reviewer names, newest first.
    pub async fn list_for_spot(&self, spot: i32) -> Result<Vec<ReviewWithAuthor>, AppError> {
        use crate::schema::{reviews, users};
        let mut conn = self.pool.get().await?;

        reviews::table
            .inner_join(users::table)
            .filter(reviews::camping_spot_id.eq(spot))
            .order(reviews::created_at.desc())
            .select((
                reviews::rating,
                reviews::comment,
                reviews::created_at,
                users::name,
            ))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
