use axum::{
    extract::{Path, RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::common::{OffsetPage, QueryParams, WebsiteId};
use crate::domains::websites::actions::{
    export_websites, fetch_website_aggregate_by_id, list_websites,
};
use crate::domains::websites::data::{
    parse_columns, ExportFormat, WebsiteAggregate, WebsiteFilter, WebsiteListing, EXPORT_FILENAME,
};
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// GET /websites - filtered, paginated website table
///
/// `?export=csv|json` turns the request into an export with the same filters.
pub async fn website_list_handler(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Response, ApiError> {
    let params = QueryParams::parse(raw.as_deref());
    if params.get_non_empty("export").is_some() {
        return export_response(&state, &params).await;
    }

    let filter = WebsiteFilter::from_params(&params);
    let columns = parse_columns(params.get_all("columns"));
    let page = OffsetPage::new(params.get_parsed("page"), params.get_parsed("per_page"));

    let listing: WebsiteListing = list_websites(filter, columns, page, &state.db_pool).await?;
    Ok(Json(listing).into_response())
}

/// GET /websites/export - every website matching the filters as CSV or JSON
pub async fn website_export_handler(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Response, ApiError> {
    let params = QueryParams::parse(raw.as_deref());
    export_response(&state, &params).await
}

async fn export_response(state: &AppState, params: &QueryParams) -> Result<Response, ApiError> {
    let filter = WebsiteFilter::from_params(params);
    let columns = parse_columns(params.get_all("columns"));
    let format = ExportFormat::parse(params.get("export"));

    let table = export_websites(&filter, columns, &state.db_pool).await?;
    info!(rows = table.len(), format = ?format, "Website export");

    match format {
        ExportFormat::Json => Ok(Json(table.to_json()).into_response()),
        ExportFormat::Csv => {
            let body = table.to_csv()?;
            Ok((
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename={}", EXPORT_FILENAME),
                    ),
                ],
                body,
            )
                .into_response())
        }
    }
}

/// GET /website/{id} - aggregate for one website by primary key
pub async fn website_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WebsiteAggregate>, ApiError> {
    let not_found = || ApiError::NotFound {
        message: format!("No website found with id: {}", id),
        search_term: id.clone(),
    };
    let website_id: WebsiteId = id.parse().map_err(|_| not_found())?;

    let aggregate = fetch_website_aggregate_by_id(website_id, &state.db_pool)
        .await
        .map_err(|e| ApiError::from_fetch(e, "id"))?;
    Ok(Json(aggregate))
}
