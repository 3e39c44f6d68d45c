/// HTTP handlers for news-service
///
/// - `news`: `POST /edit/{id}` and `GET /list`
/// - `health`: liveness and readiness probes
pub mod health;
pub mod news;

pub use news::{edit_news, list_news};

use crate::error::AppError;
use actix_web::web;

/// Register routes and extractor configuration on an `App`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .route("/edit/{id}", web::post().to(edit_news))
        .route("/list", web::get().to(list_news))
        .route("/health", web::get().to(health::liveness))
        .route("/health/ready", web::get().to(health::readiness));
}

/// Undecodable bodies (bad syntax, wrong field types, missing or non-JSON
/// content type) all map to `InvalidInput`.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected news payload");
        AppError::InvalidInput(err.to_string()).into()
    })
}

/// A non-numeric id can never match a stored record.
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        tracing::debug!(error = %err, path = %req.path(), "Rejected news id");
        AppError::NotFound(format!("unparsable id in {}", req.path())).into()
    })
}
