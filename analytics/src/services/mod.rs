pub mod chart;
pub mod csv_service;
pub mod report;

pub use chart::*;
pub use csv_service::*;
pub use report::*;
