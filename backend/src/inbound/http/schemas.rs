//! OpenAPI schema mirrors decoupled from runtime types.
//!
//! The runtime envelope is generic over its payload; this mirror gives the
//! OpenAPI document a single concrete shape without coupling the runtime
//! types to utoipa.

use utoipa::ToSchema;

/// OpenAPI shape of the uniform response envelope.
#[derive(ToSchema)]
#[schema(title = "Envelope")]
pub struct EnvelopeSchema {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Operation payload, `null` on failure.
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
    /// Human-readable summary of the outcome.
    pub message: String,
    /// Individual failure messages, empty on success.
    pub errors: Vec<String>,
    /// ISO 8601 instant at which the response was produced.
    pub timestamp: String,
}
