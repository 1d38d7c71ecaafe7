//! HTTP API layer: routes, handlers, middleware and DTOs.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::create_router;
