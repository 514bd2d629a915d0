use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::common::{QueryParams, WebsiteId};
use crate::domains::charts::{self, TopSeoMetrics};
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Positive numeric `website_id`, if one was given
fn website_id_param(params: &QueryParams) -> Option<WebsiteId> {
    params
        .get_parsed::<WebsiteId>("website_id")
        .filter(|id| id.into_inner() > 0)
}

fn website_id_required() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": "Website ID required" })),
    )
        .into_response()
}

/// GET /api/seo_metrics?limit=<n> - top websites per ranked SEO metric
pub async fn seo_metrics_handler(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Json<TopSeoMetrics>, ApiError> {
    let params = QueryParams::parse(raw.as_deref());
    let metrics = charts::top_seo_metrics(params.get_parsed("limit"), &state.db_pool).await?;
    Ok(Json(metrics))
}

/// GET /api/traffic_sources?website_id=<id>
pub async fn traffic_sources_handler(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Response, ApiError> {
    let params = QueryParams::parse(raw.as_deref());
    let Some(website_id) = website_id_param(&params) else {
        return Ok(website_id_required());
    };

    let sources = charts::traffic_sources(website_id, &state.db_pool).await?;
    Ok(Json(sources).into_response())
}

/// GET /api/geo_distribution?website_id=<id>
pub async fn geo_distribution_handler(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Response, ApiError> {
    let params = QueryParams::parse(raw.as_deref());
    let Some(website_id) = website_id_param(&params) else {
        return Ok(website_id_required());
    };

    let geo = charts::geo_distribution(website_id, &state.db_pool).await?;
    Ok(Json(geo).into_response())
}
