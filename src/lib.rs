//! # Standings Proxy
//!
//! A caching proxy for football league standings built with Axum and Redis.
//!
//! ## Architecture
//!
//! The crate follows a layered structure with clear separation:
//!
//! - **Domain Layer** ([`domain`]) - Competition ids, the standings document,
//!   and the upstream provider trait
//! - **Application Layer** ([`application`]) - The cache-aside read-through
//!   service
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis cache backends and
//!   the football-data.org client
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Cache-aside read-through proxying of competition standings
//! - 15-minute TTL bounding upstream call volume to once per competition per
//!   window
//! - Verbatim document forwarding — upstream payloads are never re-encoded
//! - Resilient cache handling: a degraded Redis turns the service into a
//!   direct passthrough instead of failing requests
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export FOOTBALL_DATA_API_KEY="your-api-key"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::StandingsService;
    pub use crate::domain::{CompetitionId, StandingsDocument, StandingsProvider};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
