//! Upstream standings provider seam.

use async_trait::async_trait;
use thiserror::Error;

use super::competition::CompetitionId;
use super::standings::StandingsDocument;

/// Errors that can occur while fetching standings from an upstream provider.
///
/// Callers do not distinguish between these at the HTTP boundary — every
/// variant collapses into the same generic failure response — but the variant
/// is logged before collapsing.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request could not be completed (connect failure, timeout, ...).
    #[error("upstream request failed: {0}")]
    Request(String),

    /// The provider answered with a non-success status code.
    #[error("upstream returned status {0}")]
    Status(u16),

    /// The provider answered 2xx but the body was not well-formed JSON.
    #[error("upstream returned malformed JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

/// Trait every standings data provider must implement.
///
/// Implementations must be thread-safe; the production implementation is
/// [`crate::infrastructure::upstream::FootballDataProvider`], and tests
/// substitute stubs through this seam.
#[async_trait]
pub trait StandingsProvider: Send + Sync {
    /// Fetches the full standings document for one competition.
    ///
    /// A single synchronous request, no retries: a failed fetch is surfaced
    /// to the caller immediately.
    async fn fetch_standings(
        &self,
        competition: &CompetitionId,
    ) -> Result<StandingsDocument, ProviderError>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}
