//! Capabilities the router can invoke, and what comes back from them.
//!
//! Collaborators hand back raw JSON. This module turns that into a
//! [`CapabilityResult`] and from there into presentation events, so the
//! orchestrator only decides *which* calls to make.

pub mod image;
pub mod result;
pub mod search;

pub use image::extract_image_bytes;
pub use result::{CapabilityError, CapabilityErrorKind, CapabilityResult};
pub use search::{is_empty_payload, search_text};

use serde::{Deserialize, Serialize};

/// An external capability the router can call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ImageGeneration,
    WebSearch,
}

impl Capability {
    pub fn as_str(&self) -> &str {
        match self {
            Capability::ImageGeneration => "image_generation",
            Capability::WebSearch => "web_search",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Capability::ImageGeneration => "Image generation",
            Capability::WebSearch => "Web search",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
