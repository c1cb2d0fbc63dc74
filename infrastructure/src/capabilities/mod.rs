//! Capability adapters: the concrete image generator and web search.
//!
//! | Adapter | Port | Backend |
//! |---------|------|---------|
//! | [`HuggingFaceImageGenerator`] | `ImageGenerator` | Hugging Face Inference API |
//! | [`DuckDuckGoSearch`] | `WebSearch` | DuckDuckGo Instant Answer API |
//!
//! Both are built once at startup with their own `reqwest::Client` and
//! shared read-only across requests.

mod duckduckgo;
mod http;
mod huggingface;

pub use duckduckgo::DuckDuckGoSearch;
pub use http::{USER_AGENT, build_client};
pub use huggingface::HuggingFaceImageGenerator;
