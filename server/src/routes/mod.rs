use actix_web::{web, HttpResponse};

use errors::{Error, ErrorResponse};

pub mod polls;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/polls")
            .app_data(web::PathConfig::default().error_handler(|err, _req| {
                debug!("Rejected path - {}", err);
                Error::NotFound("Not Found".into()).into()
            }))
            .route("/", web::get().to(polls::index))
            .route("/{id}/", web::get().to(polls::detail))
            .route("/{id}/results/", web::get().to(polls::results)),
    );
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
}
