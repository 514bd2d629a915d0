use serde::Serialize;
use serde_json::{Map, Value};

use super::columns::{ColumnInfo, WebsiteColumn};
use super::filters::WebsiteFilter;
use crate::common::Page;
use crate::domains::websites::models::Website;

/// Values for the listing's filter dropdowns
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub countries: Vec<String>,
    pub languages: Vec<String>,
}

impl FilterOptions {
    /// Split comma-separated `countries` values into a sorted, distinct list
    pub fn split_countries(raw: &[String]) -> Vec<String> {
        let mut countries: Vec<String> = raw
            .iter()
            .flat_map(|value| value.split(','))
            .map(str::trim)
            .filter(|country| !country.is_empty())
            .map(str::to_string)
            .collect();
        countries.sort();
        countries.dedup();
        countries
    }
}

/// One page of the website table
#[derive(Debug, Clone, Serialize)]
pub struct WebsiteListing {
    #[serde(flatten)]
    pub page: Page<Map<String, Value>>,
    pub selected_columns: Vec<&'static str>,
    pub available_columns: Vec<ColumnInfo>,
    pub filters: WebsiteFilter,
    pub filter_options: FilterOptions,
}

/// Project a website onto its id plus the selected columns
pub fn listing_row(website: &Website, columns: &[WebsiteColumn]) -> Map<String, Value> {
    let mut row = Map::new();
    row.insert("id".to_string(), Value::from(website.id.into_inner()));
    for column in columns {
        row.insert(column.key().to_string(), column.value(website));
    }
    row
}
