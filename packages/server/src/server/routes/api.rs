use axum::{
    extract::{RawQuery, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::common::QueryParams;
use crate::domains::websites::actions::fetch_website_aggregate;
use crate::domains::websites::WebsiteAggregate;
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Debug, Serialize)]
pub struct LookupResponse {
    status: &'static str,
    code: u16,
    search_term: String,
    data: WebsiteAggregate,
}

/// GET /api?name=<key> - website aggregate by name, url or external url
pub async fn api_search_handler(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Json<LookupResponse>, ApiError> {
    let params = QueryParams::parse(raw.as_deref());
    let search_term = params
        .get("name")
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            ApiError::Validation(
                "Website name parameter is required. Use ?name=website.com".to_string(),
            )
        })?;

    info!(search_term = %search_term, "Website lookup");

    let data = fetch_website_aggregate(&search_term, &state.db_pool)
        .await
        .map_err(|e| ApiError::from_fetch(e, "name"))?;

    Ok(Json(LookupResponse {
        status: "success",
        code: 200,
        search_term,
        data,
    }))
}
