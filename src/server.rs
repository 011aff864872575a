//! HTTP server initialization and runtime setup.
//!
//! Handles cache connection, upstream client construction, and Axum server lifecycle.

use crate::application::services::StandingsService;
use crate::config::Config;
use crate::domain::StandingsProvider;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::upstream::FootballDataProvider;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redis cache (or NullCache fallback when Redis is unreachable)
/// - Upstream provider client with its request timeout
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The upstream HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    // An unreachable cache store degrades the service to a direct upstream
    // passthrough instead of failing requests.
    let cache: Arc<dyn CacheService> = match RedisCache::connect(&config.redis_url).await {
        Ok(redis) => {
            tracing::info!("Cache enabled (Redis)");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
            Arc::new(NullCache::new())
        }
    };

    let provider = FootballDataProvider::new(
        &config.upstream_base_url,
        &config.api_key,
        Duration::from_secs(config.upstream_timeout_seconds),
    )?;
    tracing::info!("Upstream provider: {}", provider.name());

    let standings_service = Arc::new(StandingsService::new(
        Arc::new(provider),
        cache.clone(),
        config.cache_ttl_seconds,
    ));

    let state = AppState::new(standings_service, cache);

    let app = app_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
