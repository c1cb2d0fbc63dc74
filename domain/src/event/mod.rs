//! Presentation events emitted by the orchestrator.
//!
//! A request produces an ordered, append-only list of events that a
//! presentation sink renders in order and then discards.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Serialize, Serializer};

/// One unit of output for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum PresentationEvent {
    Info(String),
    Warning(String),
    Error(String),
    Success(String),
    /// Raw image bytes; serialized as base64
    RenderImage(#[serde(serialize_with = "serialize_base64")] Vec<u8>),
    RenderText(String),
}

impl PresentationEvent {
    pub fn info(text: impl Into<String>) -> Self {
        Self::Info(text.into())
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::Warning(text.into())
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::Error(text.into())
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::Success(text.into())
    }

    /// Stable tag for the event variant
    pub fn kind(&self) -> &'static str {
        match self {
            PresentationEvent::Info(_) => "info",
            PresentationEvent::Warning(_) => "warning",
            PresentationEvent::Error(_) => "error",
            PresentationEvent::Success(_) => "success",
            PresentationEvent::RenderImage(_) => "render_image",
            PresentationEvent::RenderText(_) => "render_text",
        }
    }

    /// Text carried by the event, if it is a textual one
    pub fn text(&self) -> Option<&str> {
        match self {
            PresentationEvent::Info(t)
            | PresentationEvent::Warning(t)
            | PresentationEvent::Error(t)
            | PresentationEvent::Success(t)
            | PresentationEvent::RenderText(t) => Some(t),
            PresentationEvent::RenderImage(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, PresentationEvent::Error(_))
    }
}

fn serialize_base64<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(PresentationEvent::info("x").kind(), "info");
        assert_eq!(PresentationEvent::RenderImage(vec![]).kind(), "render_image");
        assert_eq!(
            PresentationEvent::RenderText("x".into()).kind(),
            "render_text"
        );
    }

    #[test]
    fn test_text_accessor() {
        assert_eq!(PresentationEvent::warning("careful").text(), Some("careful"));
        assert_eq!(PresentationEvent::RenderImage(vec![1, 2]).text(), None);
    }

    #[test]
    fn test_serialize_text_event() {
        let json = serde_json::to_value(PresentationEvent::success("done")).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "success", "payload": "done"}));
    }

    #[test]
    fn test_serialize_image_as_base64() {
        let json = serde_json::to_value(PresentationEvent::RenderImage(b"abc".to_vec())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "render_image", "payload": "YWJj"})
        );
    }
}
