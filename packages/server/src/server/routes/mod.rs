// HTTP routes
pub mod api;
pub mod charts;
pub mod health;
pub mod websites;

pub use api::*;
pub use charts::*;
pub use health::*;
pub use websites::*;
