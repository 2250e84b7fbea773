use axum::http::{header, Method};
use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::config::Config;
use crate::shared::request_logger::request_logger;

/// Конфигурация всех роутов приложения
pub fn configure_routes(config: Arc<Config>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let static_dir = config.server.static_dir.clone();

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/config", get(handlers::client_config::get))
        .with_state(config)
        // Собранный фронтенд
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
