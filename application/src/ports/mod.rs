//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod capability;
pub mod image_generator;
pub mod presentation_sink;
pub mod progress;
pub mod web_search;
