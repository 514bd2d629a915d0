//! Listing/export filters and their SQL rendering.

use serde::Serialize;
use sqlx::{MySql, QueryBuilder};

use crate::common::QueryParams;

/// Which announcement flag a website must have set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnouncementType {
    Free,
    Paid,
}

impl AnnouncementType {
    /// `free` or `paid`; anything else means no filter
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "free" => Some(AnnouncementType::Free),
            "paid" => Some(AnnouncementType::Paid),
            _ => None,
        }
    }
}

/// Filters shared by the listing and export endpoints. All parts are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WebsiteFilter {
    /// Case-insensitive substring of name, url or countries
    pub search: Option<String>,
    /// Exact category name the website must carry
    pub category: Option<String>,
    /// Case-insensitive substring of countries
    pub country: Option<String>,
    /// Exact language
    pub language: Option<String>,
    pub announcement_type: Option<AnnouncementType>,
}

impl WebsiteFilter {
    /// Read filters from query parameters; empty values mean "no filter".
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            search: params.get_non_empty("search").map(str::to_string),
            category: params.get_non_empty("category").map(str::to_string),
            country: params.get_non_empty("country").map(str::to_string),
            language: params.get_non_empty("language").map(str::to_string),
            announcement_type: params
                .get("announcement_type")
                .and_then(AnnouncementType::parse),
        }
    }

    /// Append a `WHERE` clause (or nothing) to a query on `websites`.
    pub fn push_where(&self, query: &mut QueryBuilder<'_, MySql>) {
        let mut first = true;

        if let Some(search) = &self.search {
            let pattern = contains_pattern(search);
            push_clause(query, &mut first);
            query.push("(LOWER(name) LIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR LOWER(url) LIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR LOWER(countries) LIKE ");
            query.push_bind(pattern);
            query.push(")");
        }

        if let Some(category) = &self.category {
            push_clause(query, &mut first);
            query.push(
                "EXISTS (SELECT 1 FROM website_categories wc \
                 WHERE wc.website_id = websites.id AND wc.category_name = ",
            );
            query.push_bind(category.clone());
            query.push(")");
        }

        if let Some(country) = &self.country {
            push_clause(query, &mut first);
            query.push("LOWER(countries) LIKE ");
            query.push_bind(contains_pattern(country));
        }

        if let Some(language) = &self.language {
            push_clause(query, &mut first);
            query.push("language = ");
            query.push_bind(language.clone());
        }

        match self.announcement_type {
            Some(AnnouncementType::Free) => {
                push_clause(query, &mut first);
                query.push("is_free_announcement = TRUE");
            }
            Some(AnnouncementType::Paid) => {
                push_clause(query, &mut first);
                query.push("is_paid_announcement = TRUE");
            }
            None => {}
        }
    }
}

fn push_clause(query: &mut QueryBuilder<'_, MySql>, first: &mut bool) {
    query.push(if *first { " WHERE " } else { " AND " });
    *first = false;
}

/// Lower-cased `%needle%` with LIKE wildcards in the needle escaped
fn contains_pattern(needle: &str) -> String {
    format!("%{}%", escape_like(&needle.to_lowercase()))
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
