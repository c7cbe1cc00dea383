//! HTTP route handlers

pub mod health;
pub mod predict;
pub mod root;
pub mod weather;

use actix_web::web;

use crate::error;

/// Wire up the routes and the framework-level validation hooks.
///
/// Deserialization failures for JSON bodies and query strings are converted
/// into the shared error type here, so malformed requests produce a 422 with
/// a `detail` message instead of the framework's default 400.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .route("/", web::get().to(root::welcome))
        .route("/health", web::get().to(health::health_check))
        .route("/predict", web::post().to(predict::predict_flood))
        .route("/query-weather", web::get().to(weather::query_weather));
}
