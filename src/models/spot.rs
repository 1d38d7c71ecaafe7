use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::Deserialize;

/// Camping spot listing as stored.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::camping_spots)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CampingSpot {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: BigDecimal,
    pub owner_id: i32,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// NewCampingSpot model for inserting new listings
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::camping_spots)]
pub struct NewCampingSpot {
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: BigDecimal,
    pub owner_id: i32,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub image_url: Option<String>,
}

/// UpdateCampingSpot model for partial updates; None fields keep the
/// stored value.
#[derive(Debug, AsChangeset, Deserialize, Clone, Default)]
#[diesel(table_name = crate::schema::camping_spots)]
pub struct UpdateCampingSpot {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub price: Option<BigDecimal>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub image_url: Option<String>,
}
