pub mod charts;
pub mod websites;
