//! Output format value object

use serde::{Deserialize, Serialize};

/// How presentation events are written out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored, human-readable console output (default)
    #[default]
    Text,
    /// One JSON object per event, one event per line
    Json,
}
