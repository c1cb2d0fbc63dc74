//! Search payload interpretation

use serde_json::Value;

/// Whether a search payload counts as "no results".
///
/// Null, `false`, zero, blank strings and empty collections are all empty.
pub fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Render a non-empty payload as display text
pub fn search_text(payload: &Value) -> Option<String> {
    if is_empty_payload(payload) {
        return None;
    }
    match payload {
        Value::String(s) => Some(s.clone()),
        other => Some(serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_falsy_payloads() {
        for payload in [
            json!(null),
            json!(false),
            json!(0),
            json!(""),
            json!("   \n"),
            json!([]),
            json!({}),
        ] {
            assert!(is_empty_payload(&payload), "{payload} should be empty");
            assert!(search_text(&payload).is_none());
        }
    }

    #[test]
    fn test_text_payload_passes_through() {
        assert_eq!(
            search_text(&json!("## Results")),
            Some("## Results".to_string())
        );
    }

    #[test]
    fn test_structured_payload_pretty_printed() {
        let text = search_text(&json!([{"title": "Rust"}])).unwrap();
        assert!(text.contains("\"title\": \"Rust\""));
    }
}
