//! Static entry page for the browser client.

use actix_web::{HttpResponse, get};

/// Serve the embedded HTML entry page.
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../../../static/index.html"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test as actix_test};

    #[actix_web::test]
    async fn index_serves_the_html_page() {
        let app = actix_test::init_service(App::new().service(index)).await;

        let request = actix_test::TestRequest::get().uri("/").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert!(response.status().is_success());
        let body = actix_test::read_body(response).await;
        let text = String::from_utf8(body.to_vec()).expect("utf-8 body");
        assert!(text.contains("Atendimentos"));
    }
}
