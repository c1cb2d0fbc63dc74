//! Image generation configuration from TOML (`[image]` section)

use serde::{Deserialize, Serialize};

/// Hugging Face Inference API base URL; the model id is appended.
pub const DEFAULT_IMAGE_ENDPOINT: &str = "https://api-inference.huggingface.co/models";

/// Text-to-image model used when none is configured.
pub const DEFAULT_IMAGE_MODEL: &str = "black-forest-labs/FLUX.1-schnell";

/// Environment variable holding the API token by default.
pub const DEFAULT_TOKEN_ENV: &str = "HF_TOKEN";

/// Raw image generation configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileImageConfig {
    /// Inference API base URL
    pub endpoint: String,
    /// Model id, e.g. `black-forest-labs/FLUX.1-schnell`
    pub model: String,
    /// Name of the environment variable holding the API token
    pub token_env: String,
    /// Timeout in seconds for a generation request
    pub timeout_seconds: u64,
}

impl Default for FileImageConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_IMAGE_ENDPOINT.to_string(),
            model: DEFAULT_IMAGE_MODEL.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            timeout_seconds: 120,
        }
    }
}

impl FileImageConfig {
    /// Read the API token from the configured environment variable
    pub fn token(&self) -> Option<String> {
        std::env::var(&self.token_env)
            .ok()
            .filter(|t| !t.trim().is_empty())
    }
}
