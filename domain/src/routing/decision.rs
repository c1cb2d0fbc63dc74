//! Route decision value object

use serde::{Deserialize, Serialize};

/// Which capabilities a query is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteDecision {
    /// Generate an image, then run a related web search
    ImageAndSearch,
    /// Run a web search only
    SearchOnly,
}

impl RouteDecision {
    pub fn as_str(&self) -> &str {
        match self {
            RouteDecision::ImageAndSearch => "image_and_search",
            RouteDecision::SearchOnly => "search_only",
        }
    }

    /// User-facing name of the detected request type
    pub fn label(&self) -> &'static str {
        match self {
            RouteDecision::ImageAndSearch => "Image Generation Request",
            RouteDecision::SearchOnly => "Information Search Request",
        }
    }

    pub fn invokes_image_generation(&self) -> bool {
        matches!(self, RouteDecision::ImageAndSearch)
    }
}

impl std::fmt::Display for RouteDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(
            RouteDecision::ImageAndSearch.label(),
            "Image Generation Request"
        );
        assert_eq!(
            RouteDecision::SearchOnly.label(),
            "Information Search Request"
        );
    }

    #[test]
    fn test_only_image_route_invokes_image_generation() {
        assert!(RouteDecision::ImageAndSearch.invokes_image_generation());
        assert!(!RouteDecision::SearchOnly.invokes_image_generation());
    }

    #[test]
    fn test_serialize_snake_case() {
        let json = serde_json::to_string(&RouteDecision::SearchOnly).unwrap();
        assert_eq!(json, "\"search_only\"");
    }
}
