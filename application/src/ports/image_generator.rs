//! Image generator port
//!
//! Defines the interface for the text-to-image capability.

use super::capability::CapabilityFault;
use async_trait::async_trait;

/// Port for image generation
///
/// A successful result is a JSON structure that *may* contain an `image`
/// field; checking for it is the orchestrator's job, not the adapter's.
/// Implementations (adapters) live in the infrastructure layer and are
/// expected to be long-lived and reusable across requests.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate an image for the given prompt
    async fn generate_image(&self, prompt: &str) -> Result<serde_json::Value, CapabilityFault>;
}
