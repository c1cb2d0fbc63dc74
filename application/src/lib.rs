//! Application layer for query-router
//!
//! This crate contains the run-query use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::RoutingConfig;
pub use ports::{
    capability::CapabilityFault,
    image_generator::ImageGenerator,
    presentation_sink::PresentationSink,
    progress::{NoProgress, ProgressNotifier},
    web_search::WebSearch,
};
pub use use_cases::run_query::{EMPTY_QUERY_WARNING, RunQueryUseCase};
