//! Router tests that need no database.
//!
//! The pool points at a closed port, so anything that reaches the store fails
//! fast with a connection error.

mod common;

use crate::common::*;
use axum::http::StatusCode;
use axum::Router;
use site_catalog::server::build_app;
use sqlx::mysql::MySqlPoolOptions;
use std::time::Duration;

fn unreachable_app() -> Router {
    let pool = MySqlPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_millis(500))
        .connect_lazy("mysql://root@127.0.0.1:1/unreachable")
        .unwrap();
    build_app(pool)
}

#[tokio::test]
async fn health_does_not_touch_the_store() {
    let response = get(unreachable_app(), "/health").await;
    assert_eq!(response.status, StatusCode::OK);

    let json = response.json();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["message"], "API is running");
}

#[tokio::test]
async fn lookup_without_name_is_400() {
    for uri in ["/api", "/api?name="] {
        let response = get(unreachable_app(), uri).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{uri}");

        let json = response.json();
        assert_eq!(json["status"], "error");
        assert_eq!(json["code"], 400);
        assert_eq!(
            json["message"],
            "Website name parameter is required. Use ?name=website.com"
        );
    }
}

#[tokio::test]
async fn lookup_with_unreachable_store_is_generic_500() {
    let response = get(unreachable_app(), "/api?name=example.com").await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json();
    assert_eq!(json["status"], "error");
    assert_eq!(json["code"], 500);
    assert_eq!(json["message"], "Database connection failed");
}

#[tokio::test]
async fn repeated_name_uses_first_value() {
    let response = get(unreachable_app(), "/api?name=a.com&name=b.com").await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json();
    assert_eq!(json["code"], 500);
    assert_eq!(json["message"], "Database connection failed");
}

#[tokio::test]
async fn repeated_chart_parameters_reach_the_store() {
    for uri in [
        "/api/seo_metrics?limit=5&limit=6",
        "/api/traffic_sources?website_id=1&website_id=2",
        "/api/geo_distribution?website_id=1&website_id=2",
    ] {
        let response = get(unreachable_app(), uri).await;
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(response.json()["code"], 500, "{uri}");
    }
}

#[tokio::test]
async fn per_website_feeds_require_positive_website_id() {
    for uri in [
        "/api/traffic_sources",
        "/api/traffic_sources?website_id=abc",
        "/api/geo_distribution?website_id=0",
        "/api/geo_distribution?website_id=-5",
    ] {
        let response = get(unreachable_app(), uri).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(
            response.json(),
            serde_json::json!({ "error": "Website ID required" }),
            "{uri}"
        );
    }
}

#[tokio::test]
async fn responses_allow_any_origin() {
    let response = get(unreachable_app(), "/health").await;
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let response = get(unreachable_app(), "/nope").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
