//! Camping spot DTOs.

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{CampingSpot, NewCampingSpot, UpdateCampingSpot};
use crate::repositories::SpotFilter;

/// Request body for creating a listing. The image reference, when present,
/// is an opaque string issued by the file store.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSpotRequest {
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, max = 255, message = "Location is required"))]
    pub location: String,
    pub price: BigDecimal,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub image_url: Option<String>,
}

impl CreateSpotRequest {
    pub fn into_new_spot(self, owner_id: i32) -> NewCampingSpot {
        NewCampingSpot {
            title: self.title,
            description: self.description,
            location: self.location,
            price: self.price,
            owner_id,
            address: self.address,
            postal_code: self.postal_code,
            city: self.city,
            country: self.country,
            image_url: self.image_url,
        }
    }
}

/// Request body for updating a listing. Absent fields keep stored values.
#[derive(Debug, Deserialize, Validate, Default)]
pub struct UpdateSpotRequest {
    #[validate(length(min = 1, max = 255, message = "Title must not be empty"))]
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

impl UpdateSpotRequest {
    pub fn into_update_spot(self) -> UpdateCampingSpot {
        UpdateCampingSpot {
            title: self.title,
            description: self.description,
            location: self.location,
            price: self.price,
            address: self.address,
            postal_code: self.postal_code,
            city: self.city,
            country: self.country,
            image_url: self.image_url,
        }
    }
}

/// Query parameters for the public spot search.
#[derive(Debug, Deserialize, Default)]
pub struct SpotQuery {
    pub location: Option<String>,
    pub min_price: Option<BigDecimal>,
    pub max_price: Option<BigDecimal>,
    /// With `end_date`, excludes spots booked anywhere in the window.
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl SpotQuery {
    pub fn into_filter(self) -> SpotFilter {
        SpotFilter {
            location: self.location,
            min_price: self.min_price,
            max_price: self.max_price,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

/// Response body for a listing.
#[derive(Debug, Serialize)]
pub struct SpotResponse {
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
}

impl From<CampingSpot> for SpotResponse {
    fn from(spot: CampingSpot) -> Self {
        Self {
            id: spot.id,
            title: spot.title,
            description: spot.description,
            location: spot.location,
            price: spot.price,
            owner_id: spot.owner_id,
            address: spot.address,
            postal_code: spot.postal_code,
            city: spot.city,
            country: spot.country,
            image_url: spot.image_url,
            created_at: spot.created_at,
        }
    }
}
