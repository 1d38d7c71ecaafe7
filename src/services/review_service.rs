//! Review service: per-spot review aggregate with one-review-per-reviewer
//! upsert semantics and a derived average rating.

use crate::error::{AppError, AppResult};
use crate::models::{NewReview, Review, ReviewWithAuthor};
use crate::repositories::ReviewRepository;

/// Arithmetic mean of the given ratings, `0.0` when there are none.
pub fn average_rating(ratings: &[i32]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    sum as f64 / ratings.len() as f64
}

/// Review service.
#[derive(Clone)]
pub struct ReviewService {
    repo: ReviewRepository,
}

impl ReviewService {
    pub fn new(repo: ReviewRepository) -> Self {
        Self { repo }
    }

    /// Submits or overwrites the caller's review of a spot.
    ///
    /// One review per (user, spot): a resubmission replaces the rating,
    /// comment, and timestamp of the existing row instead of adding a new
    /// one. Returns the review and whether it was newly created.
    pub async fn upsert_review(
        &self,
        user_id: i32,
        spot_id: i32,
        rating: i32,
        comment: String,
    ) -> AppResult<(Review, bool)> {
        if !(1..=5).contains(&rating) {
            return Err(AppError::Validation {
                field: "rating".to_string(),
                reason: "Rating must be between 1 and 5".to_string(),
            });
        }

        match self.repo.find_by_user_and_spot(user_id, spot_id).await? {
            Some(existing) => {
                let review = self.repo.overwrite(existing.id, rating, comment).await?;
                Ok((review, false))
            }
            None => {
                let review = self
                    .repo
                    .create(NewReview {
                        user_id,
                        camping_spot_id: spot_id,
                        rating,
                        comment,
                    })
                    .await?;
                Ok((review, true))
            }
        }
    }

    /// Returns a spot's reviews (newest first) and the average rating.
    pub async fn get_reviews(&self, spot_id: i32) -> AppResult<(Vec<ReviewWithAuthor>, f64)> {
        let reviews = self.repo.list_for_spot(spot_id).await?;
        let ratings: Vec<i32> = reviews.iter().map(|r| r.rating).collect();
        let average = average_rating(&ratings);
        Ok((reviews, average))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_no_ratings_is_zero() {
        assert_eq!(average_rating(&[]), 0.0);
    }

    #[test]
    fn average_of_three_and_five_is_four() {
        assert_eq!(average_rating(&[3, 5]), 4.0);
    }

    #[test]
    fn average_handles_fractional_mean() {
        assert!((average_rating(&[1, 2, 2]) - 5.0 / 3.0).abs() < 1e-9);
    }
}
