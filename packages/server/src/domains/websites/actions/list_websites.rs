//! Website listing actions - filtered table page, export and filter options

use anyhow::{Context, Result};
use sqlx::MySqlPool;
use tracing::debug;

use crate::common::{OffsetPage, Page};
use crate::domains::websites::data::{
    column_catalog, listing_row, ExportTable, FilterOptions, WebsiteColumn, WebsiteFilter,
    WebsiteListing,
};
use crate::domains::websites::models::{Website, WebsiteCategory};

/// One page of websites matching the filter, projected onto `columns`
pub async fn list_websites(
    filter: WebsiteFilter,
    columns: Vec<WebsiteColumn>,
    page: OffsetPage,
    pool: &MySqlPool,
) -> Result<WebsiteListing> {
    let websites = Website::find_filtered_page(&filter, &page, pool)
        .await
        .context("Failed to load websites page")?;
    let total = Website::count_filtered(&filter, pool)
        .await
        .context("Failed to count websites")?;
    let filter_options = load_filter_options(pool).await?;

    debug!(
        total,
        page = page.page,
        per_page = page.per_page,
        returned = websites.len(),
        "Listed websites"
    );

    let rows = Page::new(websites, total, &page).map(|website| listing_row(&website, &columns));

    Ok(WebsiteListing {
        page: rows,
        selected_columns: columns.iter().map(|c| c.key()).collect(),
        available_columns: column_catalog(),
        filters: filter,
        filter_options,
    })
}

/// Every website matching the filter, projected for export
pub async fn export_websites(
    filter: &WebsiteFilter,
    columns: Vec<WebsiteColumn>,
    pool: &MySqlPool,
) -> Result<ExportTable> {
    let websites = Website::find_filtered(filter, pool)
        .await
        .context("Failed to load websites for export")?;

    debug!(rows = websites.len(), "Exporting websites");
    Ok(ExportTable::new(columns, &websites))
}

/// Distinct categories, countries and languages for the filter dropdowns
pub async fn load_filter_options(pool: &MySqlPool) -> Result<FilterOptions> {
    let categories = WebsiteCategory::distinct_names(pool)
        .await
        .context("Failed to load category names")?;
    let countries = Website::distinct_countries(pool)
        .await
        .context("Failed to load countries")?;
    let languages = Website::distinct_languages(pool)
        .await
        .context("Failed to load languages")?;

    Ok(FilterOptions {
        categories,
        countries: FilterOptions::split_countries(&countries),
        languages,
    })
}
