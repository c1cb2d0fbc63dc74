//! Web search port
//!
//! Defines the interface for the web search capability.

use super::capability::CapabilityFault;
use async_trait::async_trait;

/// Port for web search
///
/// A successful result is either a text/structured payload or an empty
/// (falsy) one, which the orchestrator reports as "no results".
#[async_trait]
pub trait WebSearch: Send + Sync {
    /// Search the web for the given query
    async fn search(&self, query: &str) -> Result<serde_json::Value, CapabilityFault>;
}
