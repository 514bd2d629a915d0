use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::{MySqlExecutor, MySqlPool, QueryBuilder};

use crate::common::{OffsetPage, WebsiteId};
use crate::domains::websites::data::WebsiteFilter;

/// Website - one tracked site with its display, rating and domain metadata
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Website {
    pub id: WebsiteId,
    pub name: Option<String>,
    pub external_url: Option<String>,
    pub url: Option<String>,
    pub placement: Option<String>,
    pub is_free_announcement: Option<bool>,
    pub is_paid_announcement: Option<bool>,

    // Rating
    pub rating_text: Option<String>,
    pub rating_class: Option<String>,
    pub rating_tooltip: Option<String>,
    pub count_review: Option<i32>,
    pub first_moderation_at: Option<String>,

    // Domain metadata
    pub protocol: Option<String>,
    pub domain_age: Option<String>,
    pub domain_zone: Option<String>,
    pub cre_type: Option<String>,

    // Numeric-as-text fields, stored exactly as scraped
    pub speed: Option<String>,
    pub language: Option<String>,
    pub countries: Option<String>, // comma-separated
    pub regions: Option<String>,
    pub amount_total_deals: Option<String>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Website {
    /// Find website by ID
    pub async fn find_by_id<'e>(
        id: WebsiteId,
        executor: impl MySqlExecutor<'e>,
    ) -> Result<Option<Self>> {
        let website = sqlx::query_as::<_, Website>("SELECT * FROM websites WHERE id = ?")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(website)
    }

    /// Find the website whose name, url or external_url equals the lookup key.
    ///
    /// When several rows match, the lowest id wins.
    pub async fn find_by_lookup_key<'e>(
        key: &str,
        executor: impl MySqlExecutor<'e>,
    ) -> Result<Option<Self>> {
        let website = sqlx::query_as::<_, Website>(
            r#"
            SELECT * FROM websites
            WHERE name = ? OR url = ? OR external_url = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(key)
        .bind(key)
        .bind(key)
        .fetch_optional(executor)
        .await?;
        Ok(website)
    }

    /// Find one page of websites matching the filter, ordered by id
    pub async fn find_filtered_page(
        filter: &WebsiteFilter,
        page: &OffsetPage,
        pool: &MySqlPool,
    ) -> Result<Vec<Self>> {
        let mut query = QueryBuilder::new("SELECT * FROM websites");
        filter.push_where(&mut query);
        query.push(" ORDER BY id LIMIT ");
        query.push_bind(page.limit());
        query.push(" OFFSET ");
        query.push_bind(page.offset());

        let websites = query.build_query_as::<Website>().fetch_all(pool).await?;
        Ok(websites)
    }

    /// Find every website matching the filter, ordered by id (no pagination)
    pub async fn find_filtered(filter: &WebsiteFilter, pool: &MySqlPool) -> Result<Vec<Self>> {
        let mut query = QueryBuilder::new("SELECT * FROM websites");
        filter.push_where(&mut query);
        query.push(" ORDER BY id");

        let websites = query.build_query_as::<Website>().fetch_all(pool).await?;
        Ok(websites)
    }

    /// Count websites matching the filter
    pub async fn count_filtered(filter: &WebsiteFilter, pool: &MySqlPool) -> Result<i64> {
        let mut query = QueryBuilder::new("SELECT COUNT(*) FROM websites");
        filter.push_where(&mut query);

        let count = query.build_query_scalar::<i64>().fetch_one(pool).await?;
        Ok(count)
    }

    /// Distinct non-null `countries` values (still comma-separated)
    pub async fn distinct_countries(pool: &MySqlPool) -> Result<Vec<String>> {
        let countries = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT countries FROM websites WHERE countries IS NOT NULL",
        )
        .fetch_all(pool)
        .await?;
        Ok(countries)
    }

    /// Distinct non-null languages, alphabetical
    pub async fn distinct_languages(pool: &MySqlPool) -> Result<Vec<String>> {
        let languages = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT language FROM websites WHERE language IS NOT NULL ORDER BY language",
        )
        .fetch_all(pool)
        .await?;
        Ok(languages)
    }
}
