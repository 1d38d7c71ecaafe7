//! HTTP middleware: authentication, request IDs, logging and error mapping.

pub mod auth;
pub mod error_handler;
pub mod logging;
pub mod request_id;

pub use auth::AuthUser;
pub use error_handler::error_to_status_code;
pub use logging::logging_middleware;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
