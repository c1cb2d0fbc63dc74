//! Image-intent keyword tables

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Full keyword table, used unless a deployment pins the classic one.
pub const EXTENDED_IMAGE_KEYWORDS: &[&str] = &[
    "draw",
    "picture",
    "photo",
    "image",
    "painting",
    "art",
    "render",
    "generate",
    "illustration",
    "create",
    "make",
    "sketch",
    "design",
    "visual",
    "graphic",
];

/// Shorter table shipped by earlier deployments.
pub const CLASSIC_IMAGE_KEYWORDS: &[&str] = &[
    "draw",
    "picture",
    "photo",
    "image",
    "painting",
    "art",
    "render",
    "generate",
    "illustration",
];

/// Selects which keyword table the classifier matches against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordProfile {
    /// All fifteen keywords (default)
    #[default]
    Extended,
    /// The original nine keywords, for parity with older deployments
    Classic,
}

impl KeywordProfile {
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            KeywordProfile::Extended => EXTENDED_IMAGE_KEYWORDS,
            KeywordProfile::Classic => CLASSIC_IMAGE_KEYWORDS,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            KeywordProfile::Extended => "extended",
            KeywordProfile::Classic => "classic",
        }
    }
}

impl std::fmt::Display for KeywordProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for KeywordProfile {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "extended" => Ok(KeywordProfile::Extended),
            "classic" => Ok(KeywordProfile::Classic),
            other => Err(DomainError::UnknownKeywordProfile(other.to_string())),
        }
    }
}
