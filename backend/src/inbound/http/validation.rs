//! Shared validation helpers for inbound HTTP adapters.

use crate::domain::Error;

/// Parse an `:id` path segment into a record id.
///
/// Rejected values never reach the repository; the caller receives an
/// invalid-request error rendered as HTTP 400.
pub(crate) fn parse_id(raw: &str) -> Result<i32, Error> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| Error::invalid_request(format!("id inválido: {raw}")))
}
