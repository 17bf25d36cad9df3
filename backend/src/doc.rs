//! OpenAPI documentation configuration.
//!
//! Generates the OpenAPI document for the REST API, served by Swagger UI in
//! debug builds. Schemas are registered through the mirror types in
//! `inbound::http::schemas` so runtime types stay decoupled from utoipa.

use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Atendimentos API",
        description = "CRUD interface for psychosocial-care visit records."
    ),
    paths(
        crate::inbound::http::atendimentos::list_atendimentos,
        crate::inbound::http::atendimentos::get_atendimento,
        crate::inbound::http::atendimentos::create_atendimento,
        crate::inbound::http::atendimentos::update_atendimento,
        crate::inbound::http::atendimentos::delete_atendimento,
        crate::inbound::http::health::health,
    ),
    components(schemas(
        crate::inbound::http::atendimentos::AtendimentoRequest,
        crate::inbound::http::atendimentos::AtendimentoResponse,
        crate::inbound::http::schemas::EnvelopeSchema,
        crate::inbound::http::health::HealthResponse,
    )),
    tags(
        (name = "atendimentos", description = "Visit record CRUD"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
