//! Keyword classifier

use super::decision::RouteDecision;
use super::keywords::KeywordProfile;

/// Maps query text to a [`RouteDecision`].
///
/// Matching is case-insensitive substring containment: "regenerate" and
/// "particle" both route to image generation. Callers relying on parity
/// with deployed behavior depend on this, so it is not tightened to
/// whole-word matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classifier {
    profile: KeywordProfile,
}

impl Classifier {
    pub fn new(profile: KeywordProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> KeywordProfile {
        self.profile
    }

    /// Classify a query. Total over all strings; `""` is `SearchOnly`.
    pub fn classify(&self, query: &str) -> RouteDecision {
        match self.matched_keyword(query) {
            Some(_) => RouteDecision::ImageAndSearch,
            None => RouteDecision::SearchOnly,
        }
    }

    /// First keyword (in table order) found in the query, if any
    pub fn matched_keyword(&self, query: &str) -> Option<&'static str> {
        let lowered = query.to_lowercase();
        self.profile
            .keywords()
            .iter()
            .copied()
            .find(|keyword| lowered.contains(keyword))
    }
}

/// Classify with the default (extended) keyword table
pub fn classify(query: &str) -> RouteDecision {
    Classifier::default().classify(query)
}
