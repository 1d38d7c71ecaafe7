//! Review aggregate handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::Serialize;

use crate::api::dto::{ReviewsResponse, UpsertReviewRequest};
use crate::api::middleware::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;

/// Response body after submitting a review.
#[derive(Debug, Serialize)]
pub struct ReviewSubmittedResponse {
    pub message: String,
    pub review_id: i32,
}

/// Creates the review routes
///
/// # Routes
/// - `GET /{spot_id}` - Public reviews plus mean rating
/// - `POST /{spot_id}` - Submit or overwrite the bearer's review
pub fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/{spot_id}", get(get_reviews))
        .route("/{spot_id}", post(upsert_review))
}

/// GET /api/reviews/{spot_id} - Reviews for a spot
///
/// Ordered newest first; `average_rating` is 0 when no reviews exist.
async fn get_reviews(
    State(state): State<AppState>,
    Path(spot_id): Path<i32>,
) -> AppResult<Json<ReviewsResponse>> {
    let (reviews, average_rating) = state.services.reviews.get_reviews(spot_id).await?;

    Ok(Json(ReviewsResponse {
        average_rating,
        reviews: reviews.into_iter().map(Into::into).collect(),
    }))
}

/// POST /api/reviews/{spot_id} - Submit a review
///
/// One review per user and spot: resubmitting overwrites rating, comment
/// and timestamp. Answers 201 on first submission, 200 on overwrite.
async fn upsert_review(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(spot_id): Path<i32>,
    Json(payload): Json<UpsertReviewRequest>,
) -> AppResult<(StatusCode, Json<ReviewSubmittedResponse>)> {
    let (review, created) = state
        .services
        .reviews
        .upsert_review(
            auth_user.user_id,
            spot_id,
            payload.rating,
            payload.comment.unwrap_or_default(),
        )
        .await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    let message = if created {
        "Review created"
    } else {
        "Review updated"
    };

    Ok((
        status,
        Json(ReviewSubmittedResponse {
            message: message.to_string(),
            review_id: review.id,
        }),
    ))
}
