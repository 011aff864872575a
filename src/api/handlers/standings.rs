//! Handler for competition standings.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::domain::CompetitionId;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the full standings document for a competition.
///
/// # Endpoint
///
/// `GET /standings/{competition_id}`
///
/// # Request Flow
///
/// 1. Wrap the path segment as an opaque competition id (no validation)
/// 2. Delegate to [`crate::application::services::StandingsService`]
///    (cache lookup, upstream fetch on miss, cache refresh)
/// 3. Return the document bytes verbatim as `application/json`
///
/// # Errors
///
/// Any failure — upstream unreachable, non-2xx status, malformed body —
/// produces `500` with the body `{"error":"Failed to fetch standings"}`.
pub async fn standings_handler(
    Path(competition_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let competition = CompetitionId::from(competition_id);

    let document = state.standings_service.get_standings(&competition).await?;

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        document.into_inner(),
    )
        .into_response())
}
