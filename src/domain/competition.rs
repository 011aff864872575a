//! Competition identifier and cache key derivation.

use std::fmt;

/// Opaque competition identifier as supplied by the caller (e.g. `"2021"`).
///
/// Identifiers are not validated against a known-league list; any value is
/// forwarded to the upstream provider as-is, and an upstream rejection is
/// surfaced as a generic fetch failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompetitionId(String);

impl CompetitionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derives the cache key under which this competition's standings are
    /// stored: `standings:{id}`.
    pub fn cache_key(&self) -> String {
        format!("standings:{}", self.0)
    }
}

impl fmt::Display for CompetitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CompetitionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for CompetitionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
