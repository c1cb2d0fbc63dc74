//! JSON-lines presentation sink

use router_application::PresentationSink;
use router_domain::PresentationEvent;
use tracing::warn;

/// Renders each event as one JSON object per line
///
/// Image bytes are embedded as base64 in the `payload` field.
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn format_event(event: &PresentationEvent) -> Option<String> {
        match serde_json::to_string(event) {
            Ok(line) => Some(line),
            Err(e) => {
                warn!("Failed to serialize {} event: {}", event.kind(), e);
                None
            }
        }
    }
}

impl PresentationSink for JsonRenderer {
    fn render(&self, event: &PresentationEvent) {
        if let Some(line) = Self::format_event(event) {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_object_per_event() {
        let line = JsonRenderer::format_event(&PresentationEvent::warning("Web search returned no results."))
            .unwrap();
        assert!(!line.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["kind"], "warning");
        assert_eq!(value["payload"], "Web search returned no results.");
    }

    #[test]
    fn test_image_payload_is_base64() {
        let line = JsonRenderer::format_event(&PresentationEvent::RenderImage(b"abc".to_vec())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["kind"], "render_image");
        assert_eq!(value["payload"], "YWJj");
    }
}
