// Route exports
pub mod prediction;

pub use prediction::AppState;

use actix_web::{error, web, HttpRequest, HttpResponse};
use crate::models::ErrorResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(prediction::configure);
}

/// JSON extractor config that reports malformed bodies as
/// `422 {"detail": ...}`
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_payload_error)
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let detail = format!("Invalid request body: {}", err);
    error::InternalError::from_response(
        err,
        HttpResponse::UnprocessableEntity().json(ErrorResponse { detail }),
    )
    .into()
}
