//! Infrastructure layer for query-router
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod capabilities;
pub mod config;

// Re-export commonly used types
pub use capabilities::{DuckDuckGoSearch, HuggingFaceImageGenerator, build_client};
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileImageConfig, FileOutputConfig,
    FileOutputFormat, FileRoutingConfig, FileSearchConfig,
};
