//! HTTP request handlers, one module per API surface.

pub mod auth;
pub mod availability;
pub mod bookings;
pub mod health;
pub mod me;
pub mod reviews;
pub mod spots;

pub use auth::auth_routes;
pub use availability::availability_routes;
pub use bookings::booking_routes;
pub use health::health_routes;
pub use me::me_routes;
pub use reviews::review_routes;
pub use spots::spot_routes;
