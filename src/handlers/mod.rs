pub mod auth_handler;
pub mod course_handler;
pub mod health_handler;
pub mod lesson_handler;
pub mod quiz_handler;

use actix_web::web;

use crate::{errors::AppError, middleware::get_request_id};

/// Malformed JSON bodies are reported in the same shape as every other
/// validation failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        log::debug!(
            "Rejected request body (request_id={}): {}",
            get_request_id(req).unwrap_or_default(),
            err
        );
        AppError::ValidationError(err.to_string()).into()
    })
}

/// Mounts every route: health checks at the root, the API under `/v1`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .configure(health_handler::configure)
        .service(
            web::scope("/v1")
                .configure(auth_handler::configure)
                .configure(course_handler::configure)
                .configure(lesson_handler::configure)
                .configure(quiz_handler::configure),
        );
}
