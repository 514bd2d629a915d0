// Site Catalog - API Core
//
// Read-only HTTP API over a MySQL catalog of websites: SEO metrics, traffic,
// pricing and categories. The store is owned externally; this crate never
// writes to it.
//
// Domains live in domains/*, each with models (SQL), data (response shapes)
// and actions (entry points called from HTTP handlers).

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
