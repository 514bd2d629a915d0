use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::{MySqlExecutor, MySqlPool};

use crate::common::WebsiteId;

/// Topic category a website publishes in
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WebsiteCategory {
    pub id: i64,
    pub website_id: Option<WebsiteId>,
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
}

impl WebsiteCategory {
    pub async fn find_by_website<'e>(
        website_id: WebsiteId,
        executor: impl MySqlExecutor<'e>,
    ) -> Result<Vec<Self>> {
        let categories = sqlx::query_as::<_, WebsiteCategory>(
            "SELECT * FROM website_categories WHERE website_id = ? ORDER BY id",
        )
        .bind(website_id)
        .fetch_all(executor)
        .await?;
        Ok(categories)
    }

    /// Distinct non-null category names, alphabetical
    pub async fn distinct_names(pool: &MySqlPool) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT category_name FROM website_categories
            WHERE category_name IS NOT NULL
            ORDER BY category_name
            "#,
        )
        .fetch_all(pool)
        .await?;
        Ok(names)
    }
}
