//! Health endpoint for orchestration and uptime checks.

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::inbound::http::envelope::now_iso;

/// Service identifier reported by the health endpoint.
pub const SERVICE_NAME: &str = "atendimentos-backend";

/// Health probe payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Fixed `OK` marker.
    pub status: String,
    /// ISO 8601 instant of the probe.
    pub timestamp: String,
    /// Service identifier.
    pub service: String,
}

/// Report the service as up.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tags = ["health"],
    operation_id = "health"
)]
#[get("/health")]
pub async fn health() -> web::Json<HealthResponse> {
    web::Json(HealthResponse {
        status: "OK".to_owned(),
        timestamp: now_iso(),
        service: SERVICE_NAME.to_owned(),
    })
}
