//! Website aggregate fetch - one website row plus its seven child collections
//!
//! The whole read runs on a single connection taken from the pool at the
//! start and returned when the function exits, on success and on every error
//! path. A failure in any step aborts the fetch; no partial aggregate is
//! ever returned.

use sqlx::{MySqlConnection, MySqlPool};
use thiserror::Error;
use tracing::debug;

use crate::common::WebsiteId;
use crate::domains::websites::data::WebsiteAggregate;
use crate::domains::websites::models::{
    Website, WebsiteBadge, WebsiteCategory, WebsiteContrCategory, WebsitePrice, WebsiteSeoMetric,
    WebsiteTraffic, WebsiteTrafficGeo,
};

#[derive(Error, Debug)]
pub enum FetchError {
    /// Nothing matched; carries the caller's lookup value verbatim
    #[error("No website found matching: {0}")]
    NotFound(String),

    #[error("Database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Database query failed: {0}")]
    Query(#[source] anyhow::Error),
}

/// Resolve a lookup key (name, url or external_url) and build its aggregate
pub async fn fetch_website_aggregate(
    lookup_key: &str,
    pool: &MySqlPool,
) -> Result<WebsiteAggregate, FetchError> {
    let mut conn = pool.acquire().await.map_err(FetchError::Connection)?;

    let website = Website::find_by_lookup_key(lookup_key, &mut *conn)
        .await
        .map_err(store_error)?
        .ok_or_else(|| FetchError::NotFound(lookup_key.to_string()))?;

    debug!(website_id = %website.id, lookup_key, "Resolved website");
    load_children(website, &mut conn).await
}

/// Build the aggregate for a website primary key
pub async fn fetch_website_aggregate_by_id(
    id: WebsiteId,
    pool: &MySqlPool,
) -> Result<WebsiteAggregate, FetchError> {
    let mut conn = pool.acquire().await.map_err(FetchError::Connection)?;

    let website = Website::find_by_id(id, &mut *conn)
        .await
        .map_err(store_error)?
        .ok_or_else(|| FetchError::NotFound(id.to_string()))?;

    load_children(website, &mut conn).await
}

/// Classify a model error: a lost or unobtainable connection is a connection
/// failure wherever it happens, everything else is a query failure.
fn store_error(err: anyhow::Error) -> FetchError {
    match err.downcast::<sqlx::Error>() {
        Ok(e) if is_connection_error(&e) => FetchError::Connection(e),
        Ok(e) => FetchError::Query(e.into()),
        Err(e) => FetchError::Query(e),
    }
}

fn is_connection_error(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
    )
}

async fn load_children(
    website: Website,
    conn: &mut MySqlConnection,
) -> Result<WebsiteAggregate, FetchError> {
    let id = website.id;

    let badges = WebsiteBadge::find_by_website(id, &mut *conn)
        .await
        .map_err(store_error)?;
    let categories = WebsiteCategory::find_by_website(id, &mut *conn)
        .await
        .map_err(store_error)?;
    let contr_categories = WebsiteContrCategory::find_by_website(id, &mut *conn)
        .await
        .map_err(store_error)?;
    let prices = WebsitePrice::find_by_website(id, &mut *conn)
        .await
        .map_err(store_error)?;
    let traffic = WebsiteTraffic::find_by_website(id, &mut *conn)
        .await
        .map_err(store_error)?;
    let traffic_geo = WebsiteTrafficGeo::find_by_website(id, &mut *conn)
        .await
        .map_err(store_error)?;
    let seo_metrics = WebsiteSeoMetric::find_first_by_website(id, &mut *conn)
        .await
        .map_err(store_error)?;

    debug!(
        website_id = %id,
        badges = badges.len(),
        categories = categories.len(),
        contr_categories = contr_categories.len(),
        prices = prices.len(),
        traffic = traffic.len(),
        traffic_geo = traffic_geo.len(),
        has_seo_metrics = seo_metrics.is_some(),
        "Loaded website aggregate"
    );

    Ok(WebsiteAggregate {
        website,
        badges,
        categories,
        contr_categories,
        prices,
        traffic,
        traffic_geo,
        seo_metrics,
    })
}
