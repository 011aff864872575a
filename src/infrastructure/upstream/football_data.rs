//! football-data.org v4 API client.

use async_trait::async_trait;
use reqwest::header::HeaderValue;
use std::time::Duration;
use tracing::debug;

use crate::domain::{CompetitionId, ProviderError, StandingsDocument, StandingsProvider};

/// Header carrying the API credential, as required by the provider.
const AUTH_HEADER: &str = "X-Auth-Token";

/// Standings provider backed by the football-data.org v4 REST API.
///
/// Holds a single shared [`reqwest::Client`] constructed once at startup; the
/// request timeout is applied at the client level so every fetch inherits it.
pub struct FootballDataProvider {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FootballDataProvider {
    /// Builds the provider with a dedicated HTTP client.
    ///
    /// # Arguments
    ///
    /// - `base_url` - provider base, e.g. `"https://api.football-data.org"`
    /// - `api_key` - credential sent as `X-Auth-Token` on every request
    /// - `timeout` - total per-request deadline
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Request`] if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Request(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn standings_url(&self, competition: &CompetitionId) -> String {
        format!("{}/v4/competitions/{}/standings", self.base_url, competition)
    }
}

#[async_trait]
impl StandingsProvider for FootballDataProvider {
    async fn fetch_standings(
        &self,
        competition: &CompetitionId,
    ) -> Result<StandingsDocument, ProviderError> {
        let url = self.standings_url(competition);
        debug!("Fetching standings from upstream: {}", url);

        let response = self
            .http
            .get(&url)
            .header(
                AUTH_HEADER,
                HeaderValue::from_str(&self.api_key)
                    .map_err(|e| ProviderError::Request(format!("invalid API key: {}", e)))?,
            )
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        // Malformed bodies are rejected here; the document is otherwise
        // carried verbatim all the way to the caller.
        Ok(StandingsDocument::from_json(body)?)
    }

    fn name(&self) -> &str {
        "football-data.org"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standings_url_shape() {
        let provider = FootballDataProvider::new(
            "https://api.football-data.org",
            "test-key",
            Duration::from_secs(10),
        )
        .unwrap();

        assert_eq!(
            provider.standings_url(&CompetitionId::new("2021")),
            "https://api.football-data.org/v4/competitions/2021/standings"
        );
    }

    #[test]
    fn test_trailing_slash_in_base_url_is_trimmed() {
        let provider = FootballDataProvider::new(
            "https://api.football-data.org/",
            "test-key",
            Duration::from_secs(10),
        )
        .unwrap();

        assert_eq!(
            provider.standings_url(&CompetitionId::new("PL")),
            "https://api.football-data.org/v4/competitions/PL/standings"
        );
    }
}
