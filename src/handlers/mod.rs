pub mod employee;

use actix_web::{error, web, HttpRequest};
use log::warn;

use crate::errors::AppError;

fn json_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!("Rejected payload for {} {}: {}", req.method(), req.path(), err);
    AppError::BadRequest(err.to_string()).into()
}

fn path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    warn!("Rejected path {}: {}", req.path(), err);
    AppError::BadRequest(err.to_string()).into()
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        .service(
            web::resource("/api/employees")
                .route(web::post().to(employee::create_employee))
                .route(web::get().to(employee::get_employees)),
        )
        .service(
            web::resource("/api/employees/{id}")
                .route(web::get().to(employee::get_employee_by_id))
                .route(web::put().to(employee::update_employee))
                .route(web::delete().to(employee::delete_employee)),
        );
}
