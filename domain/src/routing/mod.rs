//! Routing: deciding which capabilities a query needs.
//!
//! The decision is a deterministic keyword-membership test, not an intent
//! model: a lower-cased query is checked for any image keyword as a plain
//! substring.
//!
//! - [`keywords::KeywordProfile`]: which keyword table to use
//! - [`classifier::Classifier`]: applies a profile to a query
//! - [`decision::RouteDecision`]: the outcome

pub mod classifier;
pub mod decision;
pub mod keywords;

pub use classifier::{Classifier, classify};
pub use decision::RouteDecision;
pub use keywords::{CLASSIC_IMAGE_KEYWORDS, EXTENDED_IMAGE_KEYWORDS, KeywordProfile};
