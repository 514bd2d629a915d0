use anyhow::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::MySqlExecutor;

use crate::common::WebsiteId;

/// Traffic volume attributed to one source (search, direct, referral, ...)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WebsiteTraffic {
    pub id: i64,
    pub website_id: Option<WebsiteId>,
    pub traffic_source: Option<String>,
    pub value_raw: Option<String>,
    pub value_clean: Option<Decimal>,
}

impl WebsiteTraffic {
    pub async fn find_by_website<'e>(
        website_id: WebsiteId,
        executor: impl MySqlExecutor<'e>,
    ) -> Result<Vec<Self>> {
        let traffic = sqlx::query_as::<_, WebsiteTraffic>(
            "SELECT * FROM website_traffic WHERE website_id = ? ORDER BY id",
        )
        .bind(website_id)
        .fetch_all(executor)
        .await?;
        Ok(traffic)
    }
}
