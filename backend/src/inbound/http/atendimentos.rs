//! Atendimento CRUD handlers.
//!
//! ```text
//! GET    /atendimentos       List every visit record
//! GET    /atendimentos/{id}  Fetch one record
//! POST   /atendimentos       Create a record
//! PUT    /atendimentos/{id}  Replace a record in full
//! DELETE /atendimentos/{id}  Remove a record
//! ```
//!
//! Every response body is the uniform envelope. Dates go out in the pt-BR
//! display form `DD/MM/AAAA`; the stored value remains the ISO date.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ports::AtendimentoRepositoryError;
use crate::domain::{Atendimento, AtendimentoDraft, Error, NovoAtendimento};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::schemas::EnvelopeSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_id;

/// Create/update request body. Every field is optional at the boundary;
/// the domain validation decides which absences are errors.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct AtendimentoRequest {
    /// Patient name.
    pub nome: Option<String>,
    /// Attending professional.
    pub profissional: Option<String>,
    /// Visit date, ISO `YYYY-MM-DD`.
    #[schema(example = "2024-03-01")]
    pub data: Option<String>,
    /// Visit category label.
    #[schema(example = "Psicológico")]
    pub tipo: Option<String>,
    /// Free-form notes.
    pub observacoes: Option<String>,
}

impl From<AtendimentoRequest> for AtendimentoDraft {
    fn from(value: AtendimentoRequest) -> Self {
        Self {
            nome: value.nome,
            profissional: value.profissional,
            data: value.data,
            tipo: value.tipo,
            observacoes: value.observacoes,
        }
    }
}

/// Visit record as rendered inside the envelope.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AtendimentoResponse {
    /// Generated record id.
    pub id: i32,
    /// Patient name.
    pub nome: String,
    /// Attending professional.
    pub profissional: String,
    /// Visit date in the display form `DD/MM/AAAA`.
    #[schema(example = "01/03/2024")]
    pub data: String,
    /// Visit category label.
    pub tipo: String,
    /// Free-form notes, possibly empty.
    pub observacoes: String,
}

impl From<Atendimento> for AtendimentoResponse {
    fn from(value: Atendimento) -> Self {
        Self {
            id: value.id,
            nome: value.nome,
            profissional: value.profissional,
            data: value.data.format("%d/%m/%Y").to_string(),
            tipo: value.tipo.to_string(),
            observacoes: value.observacoes,
        }
    }
}

fn storage_error(err: AtendimentoRepositoryError) -> Error {
    error!(error = %err, "atendimento repository failure");
    Error::internal(err.to_string())
}

fn not_found() -> Error {
    Error::not_found("Atendimento não encontrado")
}

fn parse_payload(payload: AtendimentoRequest) -> Result<NovoAtendimento, Error> {
    NovoAtendimento::from_draft(payload.into())
        .map_err(|report| Error::validation(report.into_errors()))
}

/// List every visit record, newest visit date first.
#[utoipa::path(
    get,
    path = "/atendimentos",
    responses(
        (status = 200, description = "All records, newest first", body = EnvelopeSchema),
        (status = 500, description = "Storage failure", body = EnvelopeSchema)
    ),
    tags = ["atendimentos"],
    operation_id = "listAtendimentos"
)]
#[get("/atendimentos")]
pub async fn list_atendimentos(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let registros = state.atendimentos.find_all().await.map_err(storage_error)?;

    let data: Vec<AtendimentoResponse> =
        registros.into_iter().map(AtendimentoResponse::from).collect();
    Ok(HttpResponse::Ok().json(Envelope::ok(data, "Atendimentos recuperados com sucesso")))
}

/// Fetch one visit record by id.
#[utoipa::path(
    get,
    path = "/atendimentos/{id}",
    params(("id" = String, Path, description = "Record id")),
    responses(
        (status = 200, description = "The record", body = EnvelopeSchema),
        (status = 400, description = "Malformed id", body = EnvelopeSchema),
        (status = 404, description = "No record with that id", body = EnvelopeSchema),
        (status = 500, description = "Storage failure", body = EnvelopeSchema)
    ),
    tags = ["atendimentos"],
    operation_id = "getAtendimento"
)]
#[get("/atendimentos/{id}")]
pub async fn get_atendimento(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&path.into_inner())?;

    let registro = state
        .atendimentos
        .find_by_id(id)
        .await
        .map_err(storage_error)?
        .ok_or_else(not_found)?;

    Ok(HttpResponse::Ok().json(Envelope::ok(
        AtendimentoResponse::from(registro),
        "Atendimento encontrado",
    )))
}

/// Create a visit record from a client submission.
#[utoipa::path(
    post,
    path = "/atendimentos",
    request_body = AtendimentoRequest,
    responses(
        (status = 201, description = "Record created", body = EnvelopeSchema),
        (status = 400, description = "Validation failure", body = EnvelopeSchema),
        (status = 500, description = "Storage failure", body = EnvelopeSchema)
    ),
    tags = ["atendimentos"],
    operation_id = "createAtendimento"
)]
#[post("/atendimentos")]
pub async fn create_atendimento(
    state: web::Data<HttpState>,
    payload: web::Json<AtendimentoRequest>,
) -> ApiResult<HttpResponse> {
    let novo = parse_payload(payload.into_inner())?;

    let criado = state.atendimentos.create(novo).await.map_err(storage_error)?;

    Ok(HttpResponse::Created().json(Envelope::ok(
        AtendimentoResponse::from(criado),
        "Atendimento criado com sucesso",
    )))
}

/// Replace a visit record in full.
#[utoipa::path(
    put,
    path = "/atendimentos/{id}",
    request_body = AtendimentoRequest,
    params(("id" = String, Path, description = "Record id")),
    responses(
        (status = 200, description = "Record updated", body = EnvelopeSchema),
        (status = 400, description = "Malformed id or validation failure", body = EnvelopeSchema),
        (status = 404, description = "No record with that id", body = EnvelopeSchema),
        (status = 500, description = "Storage failure", body = EnvelopeSchema)
    ),
    tags = ["atendimentos"],
    operation_id = "updateAtendimento"
)]
#[put("/atendimentos/{id}")]
pub async fn update_atendimento(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<AtendimentoRequest>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&path.into_inner())?;
    let novo = parse_payload(payload.into_inner())?;

    let atualizado = state
        .atendimentos
        .update(id, novo)
        .await
        .map_err(storage_error)?
        .ok_or_else(not_found)?;

    Ok(HttpResponse::Ok().json(Envelope::ok(
        AtendimentoResponse::from(atualizado),
        "Atendimento atualizado com sucesso",
    )))
}

/// Remove a visit record.
#[utoipa::path(
    delete,
    path = "/atendimentos/{id}",
    params(("id" = String, Path, description = "Record id")),
    responses(
        (status = 200, description = "Record removed", body = EnvelopeSchema),
        (status = 400, description = "Malformed id", body = EnvelopeSchema),
        (status = 404, description = "No record with that id", body = EnvelopeSchema),
        (status = 500, description = "Storage failure", body = EnvelopeSchema)
    ),
    tags = ["atendimentos"],
    operation_id = "deleteAtendimento"
)]
#[delete("/atendimentos/{id}")]
pub async fn delete_atendimento(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&path.into_inner())?;

    let removido = state
        .atendimentos
        .delete(id)
        .await
        .map_err(storage_error)?
        .ok_or_else(not_found)?;

    Ok(HttpResponse::Ok().json(Envelope::ok(
        AtendimentoResponse::from(removido),
        "Atendimento removido com sucesso",
    )))
}
