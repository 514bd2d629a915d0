//! Test fixtures for creating catalog rows.
//!
//! The application never writes to the store, so fixtures insert with plain
//! SQL.

use site_catalog::common::WebsiteId;
use sqlx::MySqlPool;

/// Columns a test usually cares about; everything else stays NULL.
#[derive(Debug, Clone, Default)]
pub struct WebsiteFixture {
    pub name: Option<String>,
    pub url: Option<String>,
    pub external_url: Option<String>,
    pub countries: Option<String>,
    pub language: Option<String>,
    pub is_free_announcement: Option<bool>,
    pub is_paid_announcement: Option<bool>,
    pub rating_text: Option<String>,
    pub count_review: Option<i32>,
    pub amount_total_deals: Option<String>,
}

impl WebsiteFixture {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            url: Some(format!("https://{}", name)),
            ..Default::default()
        }
    }

    pub fn external_url(mut self, url: &str) -> Self {
        self.external_url = Some(url.to_string());
        self
    }

    pub fn countries(mut self, countries: &str) -> Self {
        self.countries = Some(countries.to_string());
        self
    }

    pub fn language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    pub fn free(mut self) -> Self {
        self.is_free_announcement = Some(true);
        self.is_paid_announcement = Some(false);
        self
    }

    pub fn paid(mut self) -> Self {
        self.is_free_announcement = Some(false);
        self.is_paid_announcement = Some(true);
        self
    }
}

pub async fn insert_website(pool: &MySqlPool, website: WebsiteFixture) -> WebsiteId {
    let result = sqlx::query(
        r#"
        INSERT INTO websites
            (name, url, external_url, countries, language, is_free_announcement,
             is_paid_announcement, rating_text, count_review, amount_total_deals)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(website.name)
    .bind(website.url)
    .bind(website.external_url)
    .bind(website.countries)
    .bind(website.language)
    .bind(website.is_free_announcement)
    .bind(website.is_paid_announcement)
    .bind(website.rating_text)
    .bind(website.count_review)
    .bind(website.amount_total_deals)
    .execute(pool)
    .await
    .expect("Failed to insert website");

    WebsiteId::new(result.last_insert_id() as i64)
}

pub async fn insert_badge(pool: &MySqlPool, website_id: WebsiteId, text: &str) {
    sqlx::query("INSERT INTO website_badges (website_id, badge_text, badge_class) VALUES (?, ?, ?)")
        .bind(website_id)
        .bind(text)
        .bind("badge-default")
        .execute(pool)
        .await
        .expect("Failed to insert badge");
}

pub async fn insert_category(pool: &MySqlPool, website_id: WebsiteId, name: &str) {
    sqlx::query(
        "INSERT INTO website_categories (website_id, category_id, category_name) VALUES (?, ?, ?)",
    )
    .bind(website_id)
    .bind(1_i32)
    .bind(name)
    .execute(pool)
    .await
    .expect("Failed to insert category");
}

pub async fn insert_contr_category(pool: &MySqlPool, website_id: WebsiteId, name: &str) {
    sqlx::query(
        "INSERT INTO website_contr_categories (website_id, contr_id, contr_name) VALUES (?, ?, ?)",
    )
    .bind(website_id)
    .bind(1_i32)
    .bind(name)
    .execute(pool)
    .await
    .expect("Failed to insert contributor category");
}

pub async fn insert_price(pool: &MySqlPool, website_id: WebsiteId, title: &str, price: &str) {
    sqlx::query(
        r#"
        INSERT INTO website_prices
            (website_id, format_id, title, price_publication_raw, price_publication, is_spelling_free)
        VALUES (?, ?, ?, ?, CAST(? AS DECIMAL(12, 2)), ?)
        "#,
    )
    .bind(website_id)
    .bind(1_i32)
    .bind(title)
    .bind(format!("{} USD", price))
    .bind(price)
    .bind(false)
    .execute(pool)
    .await
    .expect("Failed to insert price");
}

pub async fn insert_traffic(
    pool: &MySqlPool,
    website_id: WebsiteId,
    source: &str,
    value: Option<&str>,
) {
    sqlx::query(
        r#"
        INSERT INTO website_traffic (website_id, traffic_source, value_raw, value_clean)
        VALUES (?, ?, ?, CAST(? AS DECIMAL(12, 2)))
        "#,
    )
    .bind(website_id)
    .bind(source)
    .bind(value)
    .bind(value)
    .execute(pool)
    .await
    .expect("Failed to insert traffic");
}

pub async fn insert_traffic_geo(
    pool: &MySqlPool,
    website_id: WebsiteId,
    country: &str,
    percent: Option<&str>,
) {
    sqlx::query(
        r#"
        INSERT INTO website_traffic_geo (website_id, country_name, percent_raw, percent_clean)
        VALUES (?, ?, ?, CAST(? AS DECIMAL(6, 2)))
        "#,
    )
    .bind(website_id)
    .bind(country)
    .bind(percent)
    .bind(percent)
    .execute(pool)
    .await
    .expect("Failed to insert traffic geo");
}

/// SEO metrics row with the three ranked metrics set (others NULL)
pub async fn insert_seo_metric(
    pool: &MySqlPool,
    website_id: WebsiteId,
    ahrefs_dr: Option<&str>,
    ahrefs_traffic: Option<&str>,
    da_moz: Option<&str>,
) {
    sqlx::query(
        r#"
        INSERT INTO website_seo_metrics
            (website_id, ahrefs_dr_raw, ahrefs_dr, ahrefs_traffic_raw, ahrefs_traffic, da_moz_raw, da_moz)
        VALUES (?, ?, CAST(? AS DECIMAL(12, 2)), ?, CAST(? AS DECIMAL(12, 2)), ?, CAST(? AS DECIMAL(12, 2)))
        "#,
    )
    .bind(website_id)
    .bind(ahrefs_dr)
    .bind(ahrefs_dr)
    .bind(ahrefs_traffic)
    .bind(ahrefs_traffic)
    .bind(da_moz)
    .bind(da_moz)
    .execute(pool)
    .await
    .expect("Failed to insert SEO metrics");
}
