use anyhow::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::MySqlExecutor;

use crate::common::WebsiteId;

/// Publication price offer for one placement format
///
/// Each amount is kept twice: the `_raw` text as scraped and the cleaned
/// decimal (NULL when the raw text did not parse).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WebsitePrice {
    pub id: i64,
    pub website_id: Option<WebsiteId>,
    pub format_id: Option<i32>,
    pub title: Option<String>,

    pub price_publication_raw: Option<String>,
    pub price_publication_old_raw: Option<String>,
    pub publication_with_contr_categories_raw: Option<String>,
    pub price_spelling_raw: Option<String>,

    pub price_publication: Option<Decimal>,
    pub price_publication_old: Option<Decimal>,
    pub publication_with_contr_categories: Option<Decimal>,
    pub price_spelling: Option<Decimal>,
    pub is_spelling_free: Option<bool>,
}

impl WebsitePrice {
    pub async fn find_by_website<'e>(
        website_id: WebsiteId,
        executor: impl MySqlExecutor<'e>,
    ) -> Result<Vec<Self>> {
        let prices = sqlx::query_as::<_, WebsitePrice>(
            "SELECT * FROM website_prices WHERE website_id = ? ORDER BY id",
        )
        .bind(website_id)
        .fetch_all(executor)
        .await?;
        Ok(prices)
    }
}
