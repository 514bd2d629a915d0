//! Displayable website columns for the listing and export endpoints.
//!
//! The set is fixed; callers pick a subset by key. Three columns are renamed
//! in export output (`rating_text` → `rating`, `count_review` → `review_count`,
//! `amount_total_deals` → `total_deals`).

use serde::Serialize;
use serde_json::Value;

use crate::domains::websites::models::Website;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WebsiteColumn {
    Name,
    Url,
    Countries,
    Language,
    RatingText,
    CountReview,
    DomainAge,
    DomainZone,
    Speed,
    AmountTotalDeals,
}

impl WebsiteColumn {
    pub const ALL: [WebsiteColumn; 10] = [
        WebsiteColumn::Name,
        WebsiteColumn::Url,
        WebsiteColumn::Countries,
        WebsiteColumn::Language,
        WebsiteColumn::RatingText,
        WebsiteColumn::CountReview,
        WebsiteColumn::DomainAge,
        WebsiteColumn::DomainZone,
        WebsiteColumn::Speed,
        WebsiteColumn::AmountTotalDeals,
    ];

    /// Used when the caller selects nothing usable
    pub const DEFAULT: [WebsiteColumn; 4] = [
        WebsiteColumn::Name,
        WebsiteColumn::Url,
        WebsiteColumn::Countries,
        WebsiteColumn::Language,
    ];

    /// Selection key (also the `websites` column name)
    pub fn key(&self) -> &'static str {
        match self {
            WebsiteColumn::Name => "name",
            WebsiteColumn::Url => "url",
            WebsiteColumn::Countries => "countries",
            WebsiteColumn::Language => "language",
            WebsiteColumn::RatingText => "rating_text",
            WebsiteColumn::CountReview => "count_review",
            WebsiteColumn::DomainAge => "domain_age",
            WebsiteColumn::DomainZone => "domain_zone",
            WebsiteColumn::Speed => "speed",
            WebsiteColumn::AmountTotalDeals => "amount_total_deals",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WebsiteColumn::Name => "Website Name",
            WebsiteColumn::Url => "URL",
            WebsiteColumn::Countries => "Countries",
            WebsiteColumn::Language => "Language",
            WebsiteColumn::RatingText => "Rating",
            WebsiteColumn::CountReview => "Review Count",
            WebsiteColumn::DomainAge => "Domain Age",
            WebsiteColumn::DomainZone => "Domain Zone",
            WebsiteColumn::Speed => "Speed",
            WebsiteColumn::AmountTotalDeals => "Total Deals",
        }
    }

    /// Field name in CSV/JSON export output
    pub fn export_key(&self) -> &'static str {
        match self {
            WebsiteColumn::RatingText => "rating",
            WebsiteColumn::CountReview => "review_count",
            WebsiteColumn::AmountTotalDeals => "total_deals",
            other => other.key(),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// This column's value for one website (`Null` when unset)
    pub fn value(&self, website: &Website) -> Value {
        let text = match self {
            WebsiteColumn::Name => &website.name,
            WebsiteColumn::Url => &website.url,
            WebsiteColumn::Countries => &website.countries,
            WebsiteColumn::Language => &website.language,
            WebsiteColumn::RatingText => &website.rating_text,
            WebsiteColumn::CountReview => {
                return website.count_review.map(Value::from).unwrap_or(Value::Null)
            }
            WebsiteColumn::DomainAge => &website.domain_age,
            WebsiteColumn::DomainZone => &website.domain_zone,
            WebsiteColumn::Speed => &website.speed,
            WebsiteColumn::AmountTotalDeals => &website.amount_total_deals,
        };
        text.clone().map(Value::String).unwrap_or(Value::Null)
    }
}

/// Parse the caller's column selection.
///
/// Accepts repeated values and comma-separated lists. Unknown keys are
/// dropped, duplicates removed, caller order kept; an empty result falls back
/// to [`WebsiteColumn::DEFAULT`].
pub fn parse_columns<'a>(raw: impl IntoIterator<Item = &'a str>) -> Vec<WebsiteColumn> {
    let mut columns = Vec::new();
    for key in raw.into_iter().flat_map(|value| value.split(',')) {
        if let Some(column) = WebsiteColumn::from_key(key.trim()) {
            if !columns.contains(&column) {
                columns.push(column);
            }
        }
    }

    if columns.is_empty() {
        WebsiteColumn::DEFAULT.to_vec()
    } else {
        columns
    }
}

/// Entry in the column picker
#[derive(Debug, Clone, Serialize)]
pub struct ColumnInfo {
    pub key: &'static str,
    pub label: &'static str,
}

pub fn column_catalog() -> Vec<ColumnInfo> {
    WebsiteColumn::ALL
        .iter()
        .map(|c| ColumnInfo {
            key: c.key(),
            label: c.label(),
        })
        .collect()
}
