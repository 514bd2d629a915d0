//! Websites domain actions - entry-point logic called from HTTP handlers

pub mod fetch_aggregate;
pub mod list_websites;

pub use fetch_aggregate::{fetch_website_aggregate, fetch_website_aggregate_by_id, FetchError};
pub use list_websites::{export_websites, list_websites, load_filter_options};
