//! The standings payload, carried verbatim.

use serde::de::IgnoredAny;

/// One competition's full standings payload as returned by the upstream
/// provider.
///
/// The service never interprets the internal structure of this document — it
/// validates that the body is well-formed JSON on ingest, then caches and
/// forwards the original bytes verbatim. A cached value is always a
/// previously-seen upstream response; no synthesized or partial documents are
/// ever stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsDocument(String);

impl StandingsDocument {
    /// Wraps a raw upstream response body, rejecting anything that is not
    /// well-formed JSON. The bytes are kept as received; nothing is
    /// re-encoded.
    pub fn from_json(body: String) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<IgnoredAny>(&body)?;
        Ok(Self(body))
    }

    /// Wraps a value read back from the cache.
    ///
    /// Cached values were validated by [`Self::from_json`] before being
    /// written, so no re-validation happens here.
    pub fn from_cached(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
