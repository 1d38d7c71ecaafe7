//! Service layer for business logic operations.
//!
//! Services encapsulate business rules and coordinate between
//! repositories and handlers.

mod availability_service;
mod booking_service;
mod review_service;
mod spot_service;
mod user_service;

pub use availability_service::{AvailabilityService, CalendarEntry};
pub use booking_service::BookingService;
pub use review_service::{ReviewService, average_rating};
pub use spot_service::SpotService;
pub use user_service::{ProfileUpdate, Registration, UserService};

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since underlying pools use `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub users: UserService,
    pub spots: SpotService,
    pub bookings: BookingService,
    pub availability: AvailabilityService,
    pub reviews: ReviewService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            users: UserService::new(repos.users),
            spots: SpotService::new(repos.spots.clone()),
            bookings: BookingService::new(repos.bookings),
            availability: AvailabilityService::new(repos.availability, repos.spots),
            reviews: ReviewService::new(repos.reviews),
        }
    }
}
