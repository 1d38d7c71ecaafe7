//! Review DTOs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::ReviewWithAuthor;

/// Request body for submitting or updating a review.
#[derive(Debug, Deserialize)]
pub struct UpsertReviewRequest {
    pub rating: i32,
    pub comment: Option<String>,
}

/// One review as shown on a spot's page.
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub rating: i32,
    pub comment: String,
    pub created_at: NaiveDateTime,
    pub reviewer: String,
}

impl From<ReviewWithAuthor> for ReviewResponse {
    fn from(r: ReviewWithAuthor) -> Self {
        Self {
            rating: r.rating,
            comment: r.comment,
            created_at: r.created_at,
            reviewer: r.reviewer,
        }
    }
}

/// Aggregate response: a spot's reviews and the derived mean rating,
/// which is 0 rather than null when no reviews exist.
#[derive(Debug, Serialize)]
pub struct ReviewsResponse {
    pub average_rating: f64,
    pub reviews: Vec<ReviewResponse>,
}
