//! Query value object

use super::error::DomainError;

/// A user request submitted for routing (Value Object)
///
/// The content is stored trimmed and is guaranteed to be non-empty, so
/// anything holding a `Query` can hand it to the capabilities directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    content: String,
}

impl Query {
    /// Validate raw input, rejecting empty or whitespace-only text
    pub fn try_new(content: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = content.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyQuery);
        }
        Ok(Self {
            content: trimmed.to_string(),
        })
    }

    /// Get the query content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<&str> for Query {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Query::try_new(s)
    }
}
