//! Charts domain - SEO rankings and per-website traffic breakdowns

pub mod actions;
pub mod data;

pub use actions::{geo_distribution, top_seo_metrics, traffic_sources};
pub use data::{GeoDistribution, MetricSeries, TopSeoMetrics, TrafficSources};
