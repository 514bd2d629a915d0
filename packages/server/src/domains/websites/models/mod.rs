pub mod badge;
pub mod category;
pub mod contr_category;
pub mod price;
pub mod seo_metric;
pub mod traffic;
pub mod traffic_geo;
pub mod website;

pub use badge::*;
pub use category::*;
pub use contr_category::*;
pub use price::*;
pub use seo_metric::*;
pub use traffic::*;
pub use traffic_geo::*;
pub use website::*;
