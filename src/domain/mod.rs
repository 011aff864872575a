//! Core domain types and the upstream provider seam.
//!
//! This layer is framework-free: no axum, redis, or reqwest types appear here.

pub mod competition;
pub mod provider;
pub mod standings;

pub use competition::CompetitionId;
pub use provider::{ProviderError, StandingsProvider};
pub use standings::StandingsDocument;
