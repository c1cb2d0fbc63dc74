//! Application-level configuration.
//!
//! - [`RoutingConfig`]: which keyword table the classifier uses

pub mod routing_config;

pub use routing_config::RoutingConfig;
