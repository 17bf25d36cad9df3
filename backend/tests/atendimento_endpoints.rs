//! End-to-end endpoint behaviour over the in-memory fixture repository:
//! the full create → fetch → delete lifecycle through the real app wiring.

use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web};
use serde_json::{Value, json};

use atendimentos_backend::inbound::http::state::HttpState;
use atendimentos_backend::server::build_app;

fn fixture_state() -> web::Data<HttpState> {
    web::Data::new(HttpState::fixture())
}

fn payload(data: &str) -> Value {
    json!({
        "nome": "Ana",
        "profissional": "Dr. X",
        "data": data,
        "tipo": "Psicológico"
    })
}

#[actix_web::test]
async fn lifecycle_create_fetch_delete() {
    let app = actix_test::init_service(build_app(fixture_state())).await;

    // POST → 201 with an id.
    let request = actix_test::TestRequest::post()
        .uri("/atendimentos")
        .set_json(payload("2024-03-01"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = actix_test::read_body_json(response).await;
    assert_eq!(created["success"], Value::Bool(true));
    let id = created["data"]["id"].as_i64().expect("generated id");

    // GET the same record back.
    let request = actix_test::TestRequest::get()
        .uri(&format!("/atendimentos/{id}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Value = actix_test::read_body_json(response).await;
    assert_eq!(fetched["data"]["nome"], "Ana");
    assert_eq!(fetched["data"]["profissional"], "Dr. X");
    assert_eq!(fetched["data"]["tipo"], "Psicológico");
    assert_eq!(fetched["data"]["data"], "01/03/2024");

    // DELETE, then GET → 404.
    let request = actix_test::TestRequest::delete()
        .uri(&format!("/atendimentos/{id}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let request = actix_test::TestRequest::get()
        .uri(&format!("/atendimentos/{id}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["success"], Value::Bool(false));
    assert_eq!(body["errors"], json!(["Atendimento não encontrado"]));
}

#[actix_web::test]
async fn listing_orders_newest_visit_date_first() {
    let app = actix_test::init_service(build_app(fixture_state())).await;

    for data in ["2024-01-01", "2024-06-01"] {
        let request = actix_test::TestRequest::post()
            .uri("/atendimentos")
            .set_json(payload(data))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let request = actix_test::TestRequest::get()
        .uri("/atendimentos")
        .to_request();
    let body: Value =
        actix_test::read_body_json(actix_test::call_service(&app, request).await).await;

    let datas: Vec<&str> = body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|registro| registro["data"].as_str().expect("display date"))
        .collect();
    assert_eq!(datas, vec!["01/06/2024", "01/01/2024"]);
}

#[actix_web::test]
async fn validation_failures_report_every_rule() {
    let app = actix_test::init_service(build_app(fixture_state())).await;

    let request = actix_test::TestRequest::post()
        .uri("/atendimentos")
        .set_json(json!({ "tipo": "Capoeira" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    let messages: Vec<&str> = body["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .map(|msg| msg.as_str().expect("string message"))
        .collect();

    assert_eq!(
        messages,
        vec![
            "nome é obrigatório",
            "profissional é obrigatório",
            "data é obrigatória",
            "tipo deve ser um de: Psicológico, Pedagógico, Assistência Social",
        ]
    );
}

#[actix_web::test]
async fn update_replaces_the_record_in_full() {
    let app = actix_test::init_service(build_app(fixture_state())).await;

    let request = actix_test::TestRequest::post()
        .uri("/atendimentos")
        .set_json(payload("2024-03-01"))
        .to_request();
    let created: Value =
        actix_test::read_body_json(actix_test::call_service(&app, request).await).await;
    let id = created["data"]["id"].as_i64().expect("generated id");

    let request = actix_test::TestRequest::put()
        .uri(&format!("/atendimentos/{id}"))
        .set_json(json!({
            "nome": "Bruna",
            "profissional": "Dra. Y",
            "data": "2024-04-02",
            "tipo": "Pedagógico",
            "observacoes": "retorno"
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "Atendimento atualizado com sucesso");
    assert_eq!(body["data"]["id"], json!(id));
    assert_eq!(body["data"]["nome"], "Bruna");
    assert_eq!(body["data"]["data"], "02/04/2024");
    assert_eq!(body["data"]["observacoes"], "retorno");
}

#[actix_web::test]
async fn updating_a_missing_record_is_not_found() {
    let app = actix_test::init_service(build_app(fixture_state())).await;

    let request = actix_test::TestRequest::put()
        .uri("/atendimentos/42")
        .set_json(payload("2024-03-01"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn malformed_ids_never_reach_the_repository() {
    let app = actix_test::init_service(build_app(fixture_state())).await;

    for uri in ["/atendimentos/abc", "/atendimentos/1.5"] {
        let request = actix_test::TestRequest::delete().uri(uri).to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "DELETE {uri}");
    }
}

#[actix_web::test]
async fn submitted_fields_are_trimmed_before_storage() {
    let app = actix_test::init_service(build_app(fixture_state())).await;

    let request = actix_test::TestRequest::post()
        .uri("/atendimentos")
        .set_json(json!({
            "nome": "  Ana  ",
            "profissional": " Dr. X ",
            "data": "2024-03-01",
            "tipo": "Psicológico",
            "observacoes": "  acompanhamento  "
        }))
        .to_request();
    let body: Value =
        actix_test::read_body_json(actix_test::call_service(&app, request).await).await;

    assert_eq!(body["data"]["nome"], "Ana");
    assert_eq!(body["data"]["profissional"], "Dr. X");
    assert_eq!(body["data"]["observacoes"], "acompanhamento");
}
