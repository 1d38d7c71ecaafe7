//! Campground
//!
//! Backend for a camping spot booking platform: listings, per-day
//! availability calendars, a conflict-checked booking ledger, and reviews.

use shadow_rs::shadow;
shadow!(build);

pub mod api;
pub mod booking_rules;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod server;
pub mod services;
pub mod state;
pub mod utils;

pub use state::AppState;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}
