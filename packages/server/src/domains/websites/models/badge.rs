use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::MySqlExecutor;

use crate::common::WebsiteId;

/// Badge shown next to a website in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WebsiteBadge {
    pub id: i64,
    pub website_id: Option<WebsiteId>,
    pub badge_text: Option<String>,
    pub badge_tooltip: Option<String>,
    pub badge_class: Option<String>,
}

impl WebsiteBadge {
    pub async fn find_by_website<'e>(
        website_id: WebsiteId,
        executor: impl MySqlExecutor<'e>,
    ) -> Result<Vec<Self>> {
        let badges = sqlx::query_as::<_, WebsiteBadge>(
            "SELECT * FROM website_badges WHERE website_id = ? ORDER BY id",
        )
        .bind(website_id)
        .fetch_all(executor)
        .await?;
        Ok(badges)
    }
}
