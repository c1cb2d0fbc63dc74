//! Configuration file loading for query-router
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUERY_ROUTER_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./router.toml` or `./.router.toml`
//! 4. Global: `$XDG_CONFIG_HOME/query-router/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_IMAGE_ENDPOINT, DEFAULT_IMAGE_MODEL, DEFAULT_SEARCH_ENDPOINT,
    DEFAULT_TOKEN_ENV, FileConfig, FileImageConfig, FileOutputConfig, FileOutputFormat,
    FileRoutingConfig, FileSearchConfig,
};
pub use loader::ConfigLoader;
