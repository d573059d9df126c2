//! HTTP API module for the weather page and JSON endpoints.

pub mod handlers;
pub mod routes;
pub mod templates;

pub use routes::create_router;
