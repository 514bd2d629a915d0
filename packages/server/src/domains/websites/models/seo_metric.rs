use anyhow::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{MySqlExecutor, MySqlPool};

use crate::common::WebsiteId;

/// SEO metrics snapshot for a website (logically one row per website)
///
/// Each metric is kept twice: the `_raw` text as scraped and the cleaned
/// decimal (NULL when the raw text did not parse).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WebsiteSeoMetric {
    pub id: i64,
    pub website_id: Option<WebsiteId>,

    // Raw scraped values
    pub ahrefs_rank_raw: Option<String>,
    pub ahrefs_dr_raw: Option<String>,
    pub ahrefs_ur_raw: Option<String>,
    pub ahrefs_backlinks_raw: Option<String>,
    pub ahrefs_refdomains_raw: Option<String>,
    pub ahrefs_keywords_raw: Option<String>,
    pub ahrefs_traffic_raw: Option<String>,
    pub serpstat_domain_rank_raw: Option<String>,
    pub serpstat_referring_domains_raw: Option<String>,
    pub serpstat_referring_links_raw: Option<String>,
    pub tf_raw: Option<String>,
    pub cf_raw: Option<String>,
    pub da_moz_raw: Option<String>,
    pub majestic_links_raw: Option<String>,
    pub majestic_ref_domains_raw: Option<String>,
    pub google_index_raw: Option<String>,
    pub tr_raw: Option<String>,
    pub gsc_clicks_raw: Option<String>,
    pub gsc_impressions_raw: Option<String>,

    // Cleaned values
    pub ahrefs_rank: Option<Decimal>,
    pub ahrefs_dr: Option<Decimal>,
    pub ahrefs_ur: Option<Decimal>,
    pub ahrefs_backlinks: Option<Decimal>,
    pub ahrefs_refdomains: Option<Decimal>,
    pub ahrefs_keywords: Option<Decimal>,
    pub ahrefs_traffic: Option<Decimal>,
    pub serpstat_domain_rank: Option<Decimal>,
    pub serpstat_referring_domains: Option<Decimal>,
    pub serpstat_referring_links: Option<Decimal>,
    pub tf: Option<Decimal>,
    pub cf: Option<Decimal>,
    pub da_moz: Option<Decimal>,
    pub majestic_links: Option<Decimal>,
    pub majestic_ref_domains: Option<Decimal>,
    pub google_index: Option<Decimal>,
    pub tr: Option<Decimal>,
    pub gsc_clicks: Option<Decimal>,
    pub gsc_impressions: Option<Decimal>,
}

/// Metrics the chart feed ranks websites by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankedSeoMetric {
    AhrefsDr,
    AhrefsTraffic,
    DaMoz,
}

impl RankedSeoMetric {
    pub const ALL: [RankedSeoMetric; 3] = [
        RankedSeoMetric::AhrefsDr,
        RankedSeoMetric::AhrefsTraffic,
        RankedSeoMetric::DaMoz,
    ];

    /// Column in `website_seo_metrics`; also the key in the chart response
    pub fn column(&self) -> &'static str {
        match self {
            RankedSeoMetric::AhrefsDr => "ahrefs_dr",
            RankedSeoMetric::AhrefsTraffic => "ahrefs_traffic",
            RankedSeoMetric::DaMoz => "da_moz",
        }
    }
}

impl std::fmt::Display for RankedSeoMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

/// One website's position in a metric ranking
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RankedWebsite {
    pub website_id: WebsiteId,
    pub name: Option<String>,
    pub value: Decimal,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl WebsiteSeoMetric {
    /// First metrics row for a website; the lowest id wins when several exist.
    pub async fn find_first_by_website<'e>(
        website_id: WebsiteId,
        executor: impl MySqlExecutor<'e>,
    ) -> Result<Option<Self>> {
        let metric = sqlx::query_as::<_, WebsiteSeoMetric>(
            "SELECT * FROM website_seo_metrics WHERE website_id = ? ORDER BY id LIMIT 1",
        )
        .bind(website_id)
        .fetch_optional(executor)
        .await?;
        Ok(metric)
    }

    /// Top websites by one metric, highest first, skipping NULL values.
    ///
    /// Only each website's first metrics row counts, so a website appears at
    /// most once. Ties go to the lowest website id.
    pub async fn find_top_websites(
        metric: RankedSeoMetric,
        limit: i64,
        pool: &MySqlPool,
    ) -> Result<Vec<RankedWebsite>> {
        let column = metric.column();
        let sql = format!(
            r#"
            SELECT w.id AS website_id, w.name AS name, m.{column} AS value
            FROM websites w
            JOIN website_seo_metrics m ON m.id = (
                SELECT MIN(fm.id) FROM website_seo_metrics fm
                WHERE fm.website_id = w.id
            )
            WHERE m.{column} IS NOT NULL
            ORDER BY m.{column} DESC, w.id ASC
            LIMIT ?
            "#
        );

        let ranked = sqlx::query_as::<_, RankedWebsite>(&sql)
            .bind(limit)
            .fetch_all(pool)
            .await?;
        Ok(ranked)
    }
}
