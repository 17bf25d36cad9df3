//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting actix
//! handlers return `Result<_, Error>` and still render the uniform envelope
//! with consistent status codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::envelope::Envelope;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let errors = if self.errors().is_empty() {
            vec![self.message().to_owned()]
        } else {
            self.errors().to_vec()
        };

        HttpResponse::build(self.status_code())
            .json(Envelope::failure(self.message().to_owned(), errors))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak actix internals to clients.
        error!(error = %err, "actix error promoted to domain error");
        Self::internal("erro interno do servidor")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::Value;

    async fn body_of(response: HttpResponse) -> Value {
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[rstest]
    #[case(Error::invalid_request("id inválido"), StatusCode::BAD_REQUEST)]
    #[case(Error::not_found("Atendimento não encontrado"), StatusCode::NOT_FOUND)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn codes_map_to_status(#[case] err: Error, #[case] expected: StatusCode) {
        assert_eq!(err.status_code(), expected);
    }

    #[actix_web::test]
    async fn plain_errors_render_the_envelope_with_the_message() {
        let err = Error::not_found("Atendimento não encontrado");

        let body = body_of(err.error_response()).await;

        assert_eq!(body["success"], Value::Bool(false));
        assert_eq!(body["data"], Value::Null);
        assert_eq!(body["message"], "Atendimento não encontrado");
        assert_eq!(body["errors"][0], "Atendimento não encontrado");
        assert!(body["timestamp"].as_str().is_some());
    }

    #[actix_web::test]
    async fn validation_errors_list_each_violation() {
        let err = Error::validation(vec![
            "nome é obrigatório".to_owned(),
            "tipo é obrigatório".to_owned(),
        ]);

        let body = body_of(err.error_response()).await;

        assert_eq!(body["errors"].as_array().map(Vec::len), Some(2));
        assert_eq!(body["errors"][1], "tipo é obrigatório");
    }
}
