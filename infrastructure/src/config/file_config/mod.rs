//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod image;
mod output;
mod routing;
mod search;

pub use image::{DEFAULT_IMAGE_ENDPOINT, DEFAULT_IMAGE_MODEL, DEFAULT_TOKEN_ENV, FileImageConfig};
pub use output::{FileOutputConfig, FileOutputFormat};
pub use routing::FileRoutingConfig;
pub use search::{DEFAULT_SEARCH_ENDPOINT, FileSearchConfig};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{section}.timeout_seconds cannot be 0")]
    InvalidTimeout { section: &'static str },

    #[error("{section}.endpoint cannot be empty")]
    EmptyEndpoint { section: &'static str },

    #[error("image.model cannot be empty")]
    EmptyModelName,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Classifier settings
    pub routing: FileRoutingConfig,
    /// Web search adapter settings
    pub search: FileSearchConfig,
    /// Image generation adapter settings
    pub image: FileImageConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.search.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout { section: "search" });
        }
        if self.image.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout { section: "image" });
        }
        if self.search.endpoint.trim().is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint { section: "search" });
        }
        if self.image.endpoint.trim().is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint { section: "image" });
        }
        if self.image.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.search.endpoint, DEFAULT_SEARCH_ENDPOINT);
        assert_eq!(config.image.model, DEFAULT_IMAGE_MODEL);
        assert!(config.output.format.is_none());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = FileConfig::default();
        config.image.timeout_seconds = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout { section: "image" })
        );
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let mut config = FileConfig::default();
        config.search.endpoint = "  ".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::EmptyEndpoint { section: "search" })
        );
    }

    #[test]
    fn test_empty_model_rejected() {
        let mut config = FileConfig::default();
        config.image.model = String::new();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));
    }

    #[test]
    fn test_full_config_roundtrip_through_toml() {
        let toml_str = r#"
[routing]
keyword_profile = "extended"

[search]
timeout_seconds = 10

[image]
timeout_seconds = 60

[output]
color = false
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.timeout_seconds, 10);
        assert_eq!(config.image.timeout_seconds, 60);
        assert!(!config.output.color);
        assert!(config.validate().is_ok());
    }
}
