use anyhow::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::MySqlExecutor;

use crate::common::WebsiteId;

/// Share of a website's traffic coming from one country
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WebsiteTrafficGeo {
    pub id: i64,
    pub website_id: Option<WebsiteId>,
    pub country_name: Option<String>,
    pub percent_raw: Option<String>,
    pub percent_clean: Option<Decimal>,
}

impl WebsiteTrafficGeo {
    pub async fn find_by_website<'e>(
        website_id: WebsiteId,
        executor: impl MySqlExecutor<'e>,
    ) -> Result<Vec<Self>> {
        let geo = sqlx::query_as::<_, WebsiteTrafficGeo>(
            "SELECT * FROM website_traffic_geo WHERE website_id = ? ORDER BY id",
        )
        .bind(website_id)
        .fetch_all(executor)
        .await?;
        Ok(geo)
    }
}
