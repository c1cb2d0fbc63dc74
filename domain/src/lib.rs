//! Domain layer for query-router
//!
//! This crate contains the routing decision, capability results and
//! presentation events. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Routing
//!
//! A [`Query`] is classified by a keyword-membership test into a
//! [`RouteDecision`]:
//!
//! - **ImageAndSearch**: the query mentions an image keyword; generate an
//!   image, then search the web
//! - **SearchOnly**: search the web
//!
//! ## Capability results
//!
//! Each capability call yields a [`CapabilityResult`], which converts into
//! an ordered list of [`PresentationEvent`]s for the UI.

pub mod capability;
pub mod config;
pub mod core;
pub mod event;
pub mod routing;

// Re-export commonly used types
pub use capability::{
    Capability, CapabilityError, CapabilityErrorKind, CapabilityResult, extract_image_bytes,
    is_empty_payload, search_text,
};
pub use config::OutputFormat;
pub use core::{error::DomainError, query::Query};
pub use event::PresentationEvent;
pub use routing::{Classifier, KeywordProfile, RouteDecision, classify};
