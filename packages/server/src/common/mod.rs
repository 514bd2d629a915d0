// Common types and utilities shared across the application

pub mod entity_ids;
pub mod pagination;
pub mod query_params;

pub use entity_ids::*;
pub use pagination::*;
pub use query_params::QueryParams;
