//! Shared application state injected into request handlers.

use std::sync::Arc;

use crate::application::services::StandingsService;
use crate::infrastructure::cache::CacheService;

/// Process-wide shared handles, constructed once at startup.
///
/// Holding the connections in explicitly injected state (rather than globals)
/// lets tests swap in fakes through the `CacheService` and
/// `StandingsProvider` traits.
#[derive(Clone)]
pub struct AppState {
    pub standings_service: Arc<StandingsService>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    pub fn new(standings_service: Arc<StandingsService>, cache: Arc<dyn CacheService>) -> Self {
        Self {
            standings_service,
            cache,
        }
    }
}
