use serde::Serialize;

use crate::domains::websites::models::{
    Website, WebsiteBadge, WebsiteCategory, WebsiteContrCategory, WebsitePrice, WebsiteSeoMetric,
    WebsiteTraffic, WebsiteTrafficGeo,
};

/// A website row merged with all of its child collections.
///
/// Serializes flat: the website's own columns at top level, then one field
/// per child table. Empty child tables serialize as `[]`, a missing SEO
/// metrics row as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct WebsiteAggregate {
    #[serde(flatten)]
    pub website: Website,
    pub badges: Vec<WebsiteBadge>,
    pub categories: Vec<WebsiteCategory>,
    pub contr_categories: Vec<WebsiteContrCategory>,
    pub prices: Vec<WebsitePrice>,
    pub traffic: Vec<WebsiteTraffic>,
    pub traffic_geo: Vec<WebsiteTrafficGeo>,
    pub seo_metrics: Option<WebsiteSeoMetric>,
}
