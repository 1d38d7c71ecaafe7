//! Repository layer for data access operations.
//!
//! Provides async CRUD operations for all domain entities, plus the
//! transactional reserve and cascade-delete sequences.

mod availability_repo;
mod booking_repo;
mod review_repo;
mod spot_repo;
mod user_repo;

pub use availability_repo::AvailabilityRepository;
pub use booking_repo::BookingRepository;
pub use review_repo::ReviewRepository;
pub use spot_repo::{SpotFilter, SpotRepository};
pub use user_repo::UserRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub users: UserRepository,
    pub spots: SpotRepository,
    pub bookings: BookingRepository,
    pub availability: AvailabilityRepository,
    pub reviews: ReviewRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            spots: SpotRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool.clone()),
            availability: AvailabilityRepository::new(pool.clone()),
            reviews: ReviewRepository::new(pool),
        }
    }
}
