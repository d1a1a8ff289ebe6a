pub mod catalog;
pub mod config;

pub use catalog::{FormatCatalog, FormatDescriptor};
pub use config::{AppConfig, PreviewConfig};
