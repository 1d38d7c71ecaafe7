//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `auth` - Login/registration request/response DTOs
//! - `user` - Profile DTOs
//! - `spot` - Listing DTOs and search query parameters
//! - `booking` - Booking DTOs
//! - `availability` - Calendar DTOs
//! - `review` - Review DTOs
//! - `error` - Common error response DTOs

mod auth;
mod availability;
mod booking;
mod error;
mod review;
mod spot;
mod user;

pub use auth::{AuthResponse, LoginRequest, RefreshTokenRequest, RefreshTokenResponse, RegisterRequest};
pub use availability::{AvailabilityEntryResponse, CalendarEntryRequest, SetAvailabilityRequest};
pub use booking::{
    BookingCreatedResponse, BookingRangeResponse, BookingResponse, CreateBookingRequest,
};
pub use error::ErrorResponse;
pub use review::{ReviewResponse, ReviewsResponse, UpsertReviewRequest};
pub use spot::{CreateSpotRequest, SpotQuery, SpotResponse, UpdateSpotRequest};
pub use user::{UpdateProfileRequest, UserResponse};
