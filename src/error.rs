use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::ProviderError;

/// The single error message exposed to callers, regardless of cause.
const FETCH_FAILED: &str = "Failed to fetch standings";

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Service-level error surfaced at the HTTP boundary.
///
/// The error taxonomy is deliberately flat for callers: an upstream rejection,
/// a timeout, and a malformed body all produce the same opaque `500` response
/// with the body `{"error":"Failed to fetch standings"}`. The underlying cause
/// is logged at error level before it reaches this boundary.
#[derive(Debug)]
pub enum AppError {
    Upstream(ProviderError),
}

impl From<ProviderError> for AppError {
    fn from(e: ProviderError) -> Self {
        Self::Upstream(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorBody {
                error: FETCH_FAILED,
            }),
        )
            .into_response()
    }
}
