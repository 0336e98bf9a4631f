pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;

use actix_web::web;

use crate::errors::AppError;

/// Registers the employee routes and the extractor error handlers on an
/// actix `App`. Shared between `main` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(
            web::resource("/employees")
                .route(web::get().to(handlers::employee::get_employees))
                .route(web::post().to(handlers::employee::create_employee)),
        )
        .service(
            web::resource("/employees/{id}")
                .route(web::get().to(handlers::employee::get_employee_by_id))
                .route(web::put().to(handlers::employee::update_employee))
                .route(web::delete().to(handlers::employee::delete_employee)),
        );
}

// Malformed or mistyped JSON bodies become 400s with the standard error
// body instead of actix's plain-text default.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

// A non-integer id in the path is rejected up front, never coerced.
fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}
