#![allow(dead_code)]

use async_trait::async_trait;
use standings_proxy::application::services::StandingsService;
use standings_proxy::domain::{CompetitionId, ProviderError, StandingsDocument, StandingsProvider};
use standings_proxy::infrastructure::cache::MemoryCache;
use standings_proxy::state::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// What the stub upstream answers with.
pub enum StubResponse {
    /// Fixed body returned for every competition.
    Body(String),
    /// Body embedding the requested competition id, for key-isolation tests.
    PerCompetition,
    /// Non-2xx upstream status.
    Fail(u16),
}

/// Stub standings provider with an invocation counter.
pub struct StubProvider {
    response: StubResponse,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn with_body(body: &str) -> Arc<Self> {
        Arc::new(Self {
            response: StubResponse::Body(body.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn per_competition() -> Arc<Self> {
        Arc::new(Self {
            response: StubResponse::PerCompetition,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            response: StubResponse::Fail(status),
            calls: AtomicUsize::new(0),
        })
    }

    /// Number of times the upstream was invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StandingsProvider for StubProvider {
    async fn fetch_standings(
        &self,
        competition: &CompetitionId,
    ) -> Result<StandingsDocument, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let body = match &self.response {
            StubResponse::Body(body) => body.clone(),
            StubResponse::PerCompetition => format!(
                r#"{{"competition":{{"id":"{}"}},"standings":[]}}"#,
                competition
            ),
            StubResponse::Fail(status) => return Err(ProviderError::Status(*status)),
        };

        StandingsDocument::from_json(body).map_err(ProviderError::from)
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// Builds an `AppState` wired with the stub provider and an in-process cache,
/// using the production TTL of 900 seconds.
pub fn create_test_state(provider: Arc<StubProvider>) -> (AppState, Arc<MemoryCache>) {
    create_test_state_with_ttl(provider, 900)
}

pub fn create_test_state_with_ttl(
    provider: Arc<StubProvider>,
    ttl_seconds: u64,
) -> (AppState, Arc<MemoryCache>) {
    let cache = Arc::new(MemoryCache::new());
    let service = Arc::new(StandingsService::new(provider, cache.clone(), ttl_seconds));
    let state = AppState::new(service, cache.clone());

    (state, cache)
}
