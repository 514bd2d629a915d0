pub mod aggregate;
pub mod columns;
pub mod export;
pub mod filters;
pub mod listing;

pub use aggregate::WebsiteAggregate;
pub use columns::{column_catalog, parse_columns, ColumnInfo, WebsiteColumn};
pub use export::{ExportFormat, ExportTable, EXPORT_FILENAME};
pub use filters::{AnnouncementType, WebsiteFilter};
pub use listing::{listing_row, FilterOptions, WebsiteListing};
