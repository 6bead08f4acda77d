use actix_web::{HttpResponse, Responder};

pub(crate) async fn health_check_route() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain").body("OK")
}
