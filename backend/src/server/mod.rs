//! Server construction and route wiring.

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::Error;
use crate::inbound::http::atendimentos::{
    create_atendimento, delete_atendimento, get_atendimento, list_atendimentos,
    update_atendimento,
};
use crate::inbound::http::health::health;
use crate::inbound::http::index::index;
use crate::inbound::http::state::HttpState;
use crate::middleware::RequestTrace;
use crate::outbound::persistence::{DbPool, DieselAtendimentoRepository};

/// JSON extractor configuration keeping malformed bodies inside the
/// envelope instead of actix's default error body.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("corpo JSON inválido: {err}")).into()
    })
}

/// Assemble the application with every route and middleware attached.
pub fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(state)
        .app_data(json_config())
        .wrap(RequestTrace)
        .service(index)
        .service(health)
        .service(list_atendimentos)
        .service(get_atendimento)
        .service(create_atendimento)
        .service(update_atendimento)
        .service(delete_atendimento);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Create the HTTP server over the database-backed repository.
///
/// The returned server handles termination signals itself: it stops
/// accepting connections, drains in-flight requests, and the pool closes
/// when dropped afterwards.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the listening address cannot be bound.
pub fn create_server(config: &AppConfig, pool: DbPool) -> std::io::Result<Server> {
    let state = web::Data::new(HttpState::new(Arc::new(DieselAtendimentoRepository::new(
        pool,
    ))));

    let server = HttpServer::new(move || build_app(state.clone()))
        .bind(config.bind_addr())?
        .run();

    Ok(server)
}
