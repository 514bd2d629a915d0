//! Websites domain - catalog rows, the per-website aggregate, listing and export

pub mod actions;
pub mod data;
pub mod models;

pub use actions::FetchError;
pub use data::{WebsiteAggregate, WebsiteColumn, WebsiteFilter};
pub use models::{
    RankedSeoMetric, Website, WebsiteBadge, WebsiteCategory, WebsiteContrCategory, WebsitePrice,
    WebsiteSeoMetric, WebsiteTraffic, WebsiteTrafficGeo,
};
