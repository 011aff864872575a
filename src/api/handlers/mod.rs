//! HTTP request handlers for API endpoints.

pub mod health;
pub mod standings;

pub use health::health_handler;
pub use standings::standings_handler;
