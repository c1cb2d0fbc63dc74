//! Image generation adapter backed by the Hugging Face Inference API.
//!
//! Sends `{"inputs": prompt}` to `<endpoint>/<model>` and reshapes the
//! response for the orchestrator:
//!
//! | Response | Result |
//! |----------|--------|
//! | 2xx `image/*` body | `{"image": "<base64>", "mime_type": "..."}` |
//! | 2xx JSON body | passed through unchanged |
//! | 503 | [`CapabilityFault::Unavailable`] (model still loading) |
//! | other non-2xx | [`CapabilityFault::RequestFailed`] |
//!
//! A JSON body without an `image` field is not rejected here; the
//! orchestrator reports it as an unexpected result shape.

use super::http::{build_client, transport_fault};
use crate::config::FileImageConfig;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use router_application::{CapabilityFault, ImageGenerator};
use serde_json::{Value, json};
use std::time::{Duration, Instant};
use tracing::debug;

const ERROR_PREVIEW_CHARS: usize = 200;

/// Text-to-image adapter for the Hugging Face Inference API
pub struct HuggingFaceImageGenerator {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    token: Option<String>,
}

impl HuggingFaceImageGenerator {
    pub fn new(
        client: reqwest::Client,
        endpoint: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            model: model.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Build the adapter (and its HTTP client) from the `[image]` section
    pub fn from_config(config: &FileImageConfig) -> Result<Self, reqwest::Error> {
        let client = build_client(Duration::from_secs(config.timeout_seconds))?;
        Ok(Self::new(client, &config.endpoint, &config.model).with_token(config.token()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn model_url(&self) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), self.model)
    }
}

#[async_trait]
impl ImageGenerator for HuggingFaceImageGenerator {
    async fn generate_image(&self, prompt: &str) -> Result<Value, CapabilityFault> {
        let start = Instant::now();

        let mut request = self
            .client
            .post(self.model_url())
            .header(ACCEPT, "image/png")
            .json(&json!({ "inputs": prompt }));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(transport_fault)?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await.map_err(transport_fault)?;

        debug!(
            "Image model {} answered {} in {}ms ({} bytes)",
            self.model,
            status,
            start.elapsed().as_millis(),
            body.len()
        );
        interpret_response(status, content_type.as_deref(), &body)
    }
}

/// Turn a raw HTTP response into a generator result or a fault
fn interpret_response(
    status: u16,
    content_type: Option<&str>,
    body: &[u8],
) -> Result<Value, CapabilityFault> {
    if !(200..300).contains(&status) {
        let message = error_message(body);
        return Err(if status == 503 {
            CapabilityFault::Unavailable(message)
        } else {
            CapabilityFault::RequestFailed(format!("HTTP {}: {}", status, message))
        });
    }

    let mime_type = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|ct| ct.trim().to_lowercase())
        .unwrap_or_default();

    if mime_type.starts_with("image/") {
        return Ok(json!({
            "image": STANDARD.encode(body),
            "mime_type": mime_type,
        }));
    }

    serde_json::from_slice(body).map_err(|_| {
        CapabilityFault::InvalidResponse(format!(
            "expected an image or JSON body, got {} bytes of {}",
            body.len(),
            if mime_type.is_empty() {
                "unknown content"
            } else {
                mime_type.as_str()
            }
        ))
    })
}

/// Prefer the API's `{"error": "..."}` message, fall back to the raw body
fn error_message(body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<Value>(body)
        && let Some(error) = value["error"].as_str()
    {
        return error.to_string();
    }
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return "empty response body".to_string();
    }
    text.chars().take(ERROR_PREVIEW_CHARS).collect()
}
