mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use standings_proxy::api::handlers::standings_handler;
use standings_proxy::infrastructure::cache::CacheService;
use standings_proxy::state::AppState;
use std::time::Duration;

const PREMIER_LEAGUE: &str = r#"{"competition":{"id":2021,"name":"Premier League"},"standings":[{"type":"TOTAL","table":[]}]}"#;

fn test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/standings/{competition_id}", get(standings_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_cache_hit_skips_upstream() {
    let provider = common::StubProvider::with_body(PREMIER_LEAGUE);
    let (state, cache) = common::create_test_state(provider.clone());

    cache
        .set("standings:2021", r#"{"cached":true}"#, 900)
        .await
        .unwrap();

    let server = test_server(state);
    let response = server.get("/standings/2021").await;

    response.assert_status_ok();
    assert_eq!(response.text(), r#"{"cached":true}"#);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_cache_miss_populates_cache() {
    let provider = common::StubProvider::with_body(PREMIER_LEAGUE);
    let (state, cache) = common::create_test_state(provider.clone());

    let server = test_server(state);
    let response = server.get("/standings/2021").await;

    response.assert_status_ok();
    assert_eq!(response.text(), PREMIER_LEAGUE);
    assert_eq!(provider.calls(), 1);

    assert_eq!(
        cache.get("standings:2021").await.unwrap(),
        Some(PREMIER_LEAGUE.to_string())
    );

    let remaining = cache.ttl_remaining("standings:2021").unwrap();
    assert!(remaining <= Duration::from_secs(900));
}

#[tokio::test]
async fn test_response_is_json() {
    let provider = common::StubProvider::with_body(PREMIER_LEAGUE);
    let (state, _cache) = common::create_test_state(provider);

    let server = test_server(state);
    let response = server.get("/standings/2021").await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "application/json");
}

#[tokio::test]
async fn test_expired_entry_triggers_refetch() {
    let provider = common::StubProvider::with_body(PREMIER_LEAGUE);
    let (state, _cache) = common::create_test_state_with_ttl(provider.clone(), 1);

    let server = test_server(state);

    server.get("/standings/2021").await.assert_status_ok();
    assert_eq!(provider.calls(), 1);

    // Let the 1-second entry lapse, then the next call must go upstream again.
    tokio::time::sleep(Duration::from_millis(1100)).await;

    server.get("/standings/2021").await.assert_status_ok();
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_round_trip_fidelity() {
    let provider = common::StubProvider::with_body(PREMIER_LEAGUE);
    let (state, _cache) = common::create_test_state(provider.clone());

    let server = test_server(state);

    let first = server.get("/standings/2021").await;
    first.assert_status_ok();

    let second = server.get("/standings/2021").await;
    second.assert_status_ok();

    // The cache hit must return byte-identical content to the original miss.
    assert_eq!(first.text(), second.text());
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_upstream_failure_yields_generic_error() {
    let provider = common::StubProvider::failing(503);
    let (state, cache) = common::create_test_state(provider.clone());

    let server = test_server(state);
    let response = server.get("/standings/2021").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), r#"{"error":"Failed to fetch standings"}"#);

    // No entry may be written on failure.
    assert_eq!(cache.get("standings:2021").await.unwrap(), None);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_upstream_malformed_body_yields_generic_error() {
    let provider = common::StubProvider::with_body("<html>rate limited</html>");
    let (state, cache) = common::create_test_state(provider);

    let server = test_server(state);
    let response = server.get("/standings/2021").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), r#"{"error":"Failed to fetch standings"}"#);
    assert_eq!(cache.get("standings:2021").await.unwrap(), None);
}

#[tokio::test]
async fn test_distinct_competitions_are_isolated() {
    let provider = common::StubProvider::per_competition();
    let (state, cache) = common::create_test_state(provider.clone());

    let server = test_server(state);

    let premier_league = server.get("/standings/2021").await.text();
    let la_liga = server.get("/standings/2014").await.text();

    assert_ne!(premier_league, la_liga);
    assert_eq!(provider.calls(), 2);

    assert_eq!(
        cache.get("standings:2021").await.unwrap(),
        Some(premier_league.clone())
    );
    assert_eq!(cache.get("standings:2014").await.unwrap(), Some(la_liga));

    // A repeat request for one competition is served from its own entry.
    assert_eq!(server.get("/standings/2021").await.text(), premier_league);
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_empty_cache_then_repeat_request_within_ttl() {
    let provider = common::StubProvider::with_body(PREMIER_LEAGUE);
    let (state, _cache) = common::create_test_state(provider.clone());

    let server = test_server(state);

    // First request: empty cache, stub answers, exact body comes back.
    let first = server.get("/standings/2021").await;
    first.assert_status_ok();
    assert_eq!(first.text(), PREMIER_LEAGUE);

    // Second identical request within the TTL window: same body, no second
    // stub invocation.
    let second = server.get("/standings/2021").await;
    second.assert_status_ok();
    assert_eq!(second.text(), PREMIER_LEAGUE);
    assert_eq!(provider.calls(), 1);
}
