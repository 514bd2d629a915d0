//! Application setup and server configuration.

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use sqlx::MySqlPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::server::routes::{
    api_search_handler, geo_distribution_handler, health_handler, seo_metrics_handler,
    traffic_sources_handler, website_detail_handler, website_export_handler,
    website_list_handler,
};

/// Shared application state
///
/// The pool is the only shared value: handlers take one connection per
/// request from it and hand it back when the request finishes.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: MySqlPool,
}

/// Build the Axum application router
pub fn build_app(pool: MySqlPool) -> Router {
    let state = AppState { db_pool: pool };

    // CORS configuration - read-only API open to any origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        // Website lookup
        .route("/api", get(api_search_handler))
        // Chart feeds
        .route("/api/seo_metrics", get(seo_metrics_handler))
        .route("/api/traffic_sources", get(traffic_sources_handler))
        .route("/api/geo_distribution", get(geo_distribution_handler))
        // Website table
        .route("/websites", get(website_list_handler))
        .route("/websites/export", get(website_export_handler))
        .route("/website/:id", get(website_detail_handler))
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
