//! Standings retrieval service.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::{CompetitionId, StandingsDocument, StandingsProvider};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Cache-aside read-through service for competition standings.
///
/// Every call performs one cache read and, on a miss, one upstream fetch
/// followed by a best-effort cache write. Within the TTL window any recent
/// snapshot is considered valid, so concurrent misses for the same key may
/// each fetch upstream and overwrite each other's write (last write wins).
pub struct StandingsService {
    provider: Arc<dyn StandingsProvider>,
    cache: Arc<dyn CacheService>,
    cache_ttl_seconds: u64,
}

impl StandingsService {
    /// Creates a new standings service.
    pub fn new(
        provider: Arc<dyn StandingsProvider>,
        cache: Arc<dyn CacheService>,
        cache_ttl_seconds: u64,
    ) -> Self {
        Self {
            provider,
            cache,
            cache_ttl_seconds,
        }
    }

    /// Returns the standings document for a competition.
    ///
    /// # Request Flow
    ///
    /// 1. Derive the cache key (`standings:{id}`)
    /// 2. Check the cache; a hit is returned immediately with no upstream call
    /// 3. On a miss, fetch from the upstream provider
    /// 4. Write the fetched document back under the key with the configured TTL
    /// 5. Return the document verbatim
    ///
    /// # Cache Strategy
    ///
    /// - **Cache hit**: immediate return, zero upstream calls
    /// - **Cache miss**: single upstream fetch, then best-effort cache write
    /// - **Cache error**: treated as a miss; the request only fails if the
    ///   upstream fetch fails too
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the upstream fetch fails. Nothing is
    /// written to the cache in that case.
    pub async fn get_standings(
        &self,
        competition: &CompetitionId,
    ) -> Result<StandingsDocument, AppError> {
        let cache_key = competition.cache_key();

        match self.cache.get(&cache_key).await {
            Ok(Some(cached)) => {
                debug!("Cache HIT for {}", cache_key);
                return Ok(StandingsDocument::from_cached(cached));
            }
            Ok(None) => {
                debug!("Cache MISS for {}", cache_key);
            }
            Err(e) => {
                error!("Cache read error for {}: {}; treating as miss", cache_key, e);
            }
        }

        let document = self
            .provider
            .fetch_standings(competition)
            .await
            .map_err(|e| {
                error!(
                    "Failed to fetch standings for {} from {}: {}",
                    competition,
                    self.provider.name(),
                    e
                );
                AppError::Upstream(e)
            })?;

        if let Err(e) = self
            .cache
            .set(&cache_key, document.as_str(), self.cache_ttl_seconds)
            .await
        {
            warn!("Failed to cache standings for {}: {}", cache_key, e);
        }

        Ok(document)
    }
}
