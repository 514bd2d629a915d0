//! Chart feed actions

use anyhow::{Context, Result};
use sqlx::MySqlPool;

use super::data::{GeoDistribution, MetricSeries, TopSeoMetrics, TrafficSources};
use crate::common::WebsiteId;
use crate::domains::websites::models::{
    RankedSeoMetric, WebsiteSeoMetric, WebsiteTraffic, WebsiteTrafficGeo,
};

pub const DEFAULT_TOP_LIMIT: i64 = 10;
pub const MAX_TOP_LIMIT: i64 = 100;

/// Top websites for each ranked SEO metric
pub async fn top_seo_metrics(limit: Option<i64>, pool: &MySqlPool) -> Result<TopSeoMetrics> {
    let limit = limit.unwrap_or(DEFAULT_TOP_LIMIT).clamp(1, MAX_TOP_LIMIT);

    let mut metrics = TopSeoMetrics::new();
    for metric in RankedSeoMetric::ALL {
        let ranking = WebsiteSeoMetric::find_top_websites(metric, limit, pool)
            .await
            .with_context(|| format!("Failed to rank websites by {}", metric))?;
        metrics.insert(metric.column(), MetricSeries::from_ranking(ranking));
    }
    Ok(metrics)
}

pub async fn traffic_sources(website_id: WebsiteId, pool: &MySqlPool) -> Result<TrafficSources> {
    let rows = WebsiteTraffic::find_by_website(website_id, pool)
        .await
        .context("Failed to load traffic sources")?;
    Ok(TrafficSources::from(rows))
}

pub async fn geo_distribution(website_id: WebsiteId, pool: &MySqlPool) -> Result<GeoDistribution> {
    let rows = WebsiteTrafficGeo::find_by_website(website_id, pool)
        .await
        .context("Failed to load traffic geo distribution")?;
    Ok(GeoDistribution::from(rows))
}
