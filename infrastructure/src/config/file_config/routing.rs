//! Routing configuration from TOML (`[routing]` section)

use router_domain::KeywordProfile;
use serde::{Deserialize, Serialize};

/// Raw routing configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRoutingConfig {
    /// Keyword table for the classifier ("extended" or "classic")
    pub keyword_profile: KeywordProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_profile_deserialize() {
        let toml_str = r#"
[routing]
keyword_profile = "classic"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.routing.keyword_profile, KeywordProfile::Classic);
    }

    #[test]
    fn test_unknown_profile_rejected() {
        let toml_str = r#"
[routing]
keyword_profile = "fancy"
"#;
        assert!(toml::from_str::<super::super::FileConfig>(toml_str).is_err());
    }
}
