//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("Unknown keyword profile: {0} (expected \"extended\" or \"classic\")")]
    UnknownKeywordProfile(String),
}
