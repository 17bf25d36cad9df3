//! Uniform response envelope shared by every endpoint.
//!
//! Success and failure responses alike carry the same five fields, so the
//! browser client can treat all responses uniformly:
//!
//! ```json
//! { "success": true, "data": {...}, "message": "...",
//!   "errors": [], "timestamp": "2024-03-01T12:00:00.000Z" }
//! ```

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Response wrapper applied to every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Operation payload, `null` on failure.
    pub data: Option<T>,
    /// Human-readable summary of the outcome.
    pub message: String,
    /// Individual failure messages, empty on success.
    pub errors: Vec<String>,
    /// ISO 8601 instant at which the response was produced.
    pub timestamp: String,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap a successful payload.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            errors: Vec::new(),
            timestamp: now_iso(),
        }
    }
}

impl Envelope<serde_json::Value> {
    /// Wrap a failure with its individual messages.
    pub fn failure(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: message.into(),
            errors,
            timestamp: now_iso(),
        }
    }
}

/// Current instant in the envelope's ISO 8601 form.
pub(crate) fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
