//! Routing configuration for the run-query use case.

use router_domain::{Classifier, KeywordProfile};

/// Controls how queries are classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoutingConfig {
    /// Keyword table used by the classifier.
    pub keyword_profile: KeywordProfile,
}

impl RoutingConfig {
    pub fn new(keyword_profile: KeywordProfile) -> Self {
        Self { keyword_profile }
    }

    /// Build the classifier this configuration describes.
    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.keyword_profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_extended_profile() {
        let config = RoutingConfig::default();
        assert_eq!(config.classifier().profile(), KeywordProfile::Extended);
    }

    #[test]
    fn test_classic_profile() {
        let config = RoutingConfig::new(KeywordProfile::Classic);
        assert_eq!(config.classifier().profile(), KeywordProfile::Classic);
    }
}
