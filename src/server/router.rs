//! HTTP and WebSocket routing configuration.
//!
//! Defines the liveness endpoint and the game websocket endpoint.

use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};

use crate::server::game_session::session::ws_game;
use crate::server::ws_error::http_error_response;

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(index)))
        .service(web::resource("/ws").to(ws_game));
}

/// Liveness check.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Mancala WebSocket Server is running!")
}

/// Fallback for unknown routes.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    http_error_response("NOT_FOUND", "No such route", Some(req.path()), StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn liveness_endpoint_answers() {
        let app = test::init_service(App::new().configure(config)).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "Mancala WebSocket Server is running!");
    }

    #[actix_web::test]
    async fn unknown_route_is_json_404() {
        let app = test::init_service(
            App::new()
                .configure(config)
                .default_service(web::to(not_found)),
        )
        .await;
        let req = test::TestRequest::get().uri("/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["context"], "/nope");
    }
}
