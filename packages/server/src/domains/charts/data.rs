use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domains::websites::models::{RankedWebsite, WebsiteTraffic, WebsiteTrafficGeo};

/// Parallel name/value series for one ranked metric
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricSeries {
    pub names: Vec<Option<String>>,
    pub values: Vec<f64>,
}

impl MetricSeries {
    pub fn from_ranking(ranking: Vec<RankedWebsite>) -> Self {
        let mut series = MetricSeries::default();
        for entry in ranking {
            series.names.push(entry.name);
            series.values.push(to_f64(entry.value));
        }
        series
    }
}

/// Keyed by metric column (`ahrefs_dr`, `ahrefs_traffic`, `da_moz`)
pub type TopSeoMetrics = BTreeMap<&'static str, MetricSeries>;

/// Traffic split by source for one website
///
/// `values` only holds rows whose cleaned value is present, so it can be
/// shorter than `sources`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrafficSources {
    pub sources: Vec<Option<String>>,
    pub values: Vec<f64>,
}

impl From<Vec<WebsiteTraffic>> for TrafficSources {
    fn from(rows: Vec<WebsiteTraffic>) -> Self {
        let values = rows.iter().filter_map(|r| r.value_clean).map(to_f64).collect();
        let sources = rows.into_iter().map(|r| r.traffic_source).collect();
        Self { sources, values }
    }
}

/// Traffic split by country for one website
///
/// `percentages` only holds rows whose cleaned percent is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeoDistribution {
    pub countries: Vec<Option<String>>,
    pub percentages: Vec<f64>,
}

impl From<Vec<WebsiteTrafficGeo>> for GeoDistribution {
    fn from(rows: Vec<WebsiteTrafficGeo>) -> Self {
        let percentages = rows
            .iter()
            .filter_map(|r| r.percent_clean)
            .map(to_f64)
            .collect();
        let countries = rows.into_iter().map(|r| r.country_name).collect();
        Self {
            countries,
            percentages,
        }
    }
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
