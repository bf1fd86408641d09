//! Jobs API response types.

use serde::Deserialize;

/// JSON envelope returned by every jobs API endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiResponse {
    /// Status code echoed in the body.
    pub http_code: u16,
    /// Human readable outcome.
    pub message: String,
}

impl ApiResponse {
    /// Parses a response body, returning `None` for anything but the envelope.
    #[must_use]
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// Message to report for a failed request: the envelope message when
    /// present, otherwise the trimmed raw body.
    #[must_use]
    pub fn failure_message(body: &str) -> String {
        Self::parse(body).map_or_else(|| body.trim().to_string(), |r| r.message)
    }
}
