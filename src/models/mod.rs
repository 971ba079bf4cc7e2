pub mod config;
pub mod report;

pub use config::{AppConfig, ServerConfig};
pub use report::{ColorReport, FilterReport, FilterValues};
