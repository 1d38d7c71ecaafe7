use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::Deserialize;

/// Review row. One review per (user, spot) pair, enforced by the service
/// upsert rather than a schema constraint.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Review {
    pub id: i32,
    pub user_id: i32,
    pub camping_spot_id: i32,
    pub rating: i32,
    pub comment: String,
    pub created_at: NaiveDateTime,
}

/// NewReview model for first-time submissions.
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::reviews)]
pub struct NewReview {
    pub user_id: i32,
    pub camping_spot_id: i32,
    pub rating: i32,
    pub comment: String,
}

/// Review joined with the reviewer's display name.
#[derive(Debug, Queryable, Clone)]
pub struct ReviewWithAuthor {
    pub rating: i32,
    pub comment: String,
    pub created_at: NaiveDateTime,
    pub reviewer: String,
}
