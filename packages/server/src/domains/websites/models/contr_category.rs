use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::MySqlExecutor;

use crate::common::WebsiteId;

/// Contributor category - content types a website accepts from contributors
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WebsiteContrCategory {
    pub id: i64,
    pub website_id: Option<WebsiteId>,
    pub contr_id: Option<i32>,
    pub contr_name: Option<String>,
}

impl WebsiteContrCategory {
    pub async fn find_by_website<'e>(
        website_id: WebsiteId,
        executor: impl MySqlExecutor<'e>,
    ) -> Result<Vec<Self>> {
        let categories = sqlx::query_as::<_, WebsiteContrCategory>(
            "SELECT * FROM website_contr_categories WHERE website_id = ? ORDER BY id",
        )
        .bind(website_id)
        .fetch_all(executor)
        .await?;
        Ok(categories)
    }
}
