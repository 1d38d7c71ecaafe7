mod availability;
mod booking;
mod review;
mod spot;
mod user;

pub use availability::{AvailabilityEntry, NewAvailabilityEntry};
pub use booking::{Booking, BookingRange, BookingWithSpot, NewBooking};
pub use review::{NewReview, Review, ReviewWithAuthor};
pub use spot::{CampingSpot, NewCampingSpot, UpdateCampingSpot};
pub use user::{NewUser, UpdateUser, User};
