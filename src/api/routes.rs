//! Router configuration for the API.
//!
//! Centralized route registration and middleware configuration.

use axum::{Router, http::HeaderValue, middleware};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs
/// first): request IDs are assigned before logging so every log line can
/// carry one.
///
/// # Routes
/// - `/api/auth` - Registration, login, token refresh
/// - `/api/me` - Bearer's profile
/// - `/api/spots` - Listings
/// - `/api/availability` - Per-spot calendars
/// - `/api/bookings` - Booking ledger
/// - `/api/reviews` - Reviews
/// - `/api/health` - Health checks
pub fn create_router(state: AppState, cors_origin: &str) -> Router {
    let api_routes = Router::new()
        .nest("/auth", handlers::auth_routes())
        .nest("/me", handlers::me_routes())
        .nest("/spots", handlers::spot_routes())
        .nest("/availability", handlers::availability_routes())
        .nest("/bookings", handlers::booking_routes())
        .nest("/reviews", handlers::review_routes())
        .nest("/health", handlers::health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(cors_layer(cors_origin))
        // Middleware is applied in reverse order - last added runs first
        // So logging runs after request_id has set the ID
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// CORS restricted to the configured frontend origin; falls back to a
/// permissive layer when the origin does not parse as a header value.
fn cors_layer(origin: &str) -> CorsLayer {
    match origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(_) => {
            warn!(origin, "Invalid CORS origin, allowing any origin");
            CorsLayer::permissive()
        }
    }
}
