//! Core domain concepts shared across all subdomains.
//!
//! - [`query::Query`]: a validated, non-empty user request
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod query;
