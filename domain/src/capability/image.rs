//! Image payload extraction
//!
//! The image collaborator returns a JSON structure that *may* hold an
//! `image` field. Anything else is an unexpected result shape, reported
//! together with the raw payload.

use super::Capability;
use super::result::CapabilityError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

/// Field holding the image data in a generator result
pub const IMAGE_FIELD: &str = "image";

const RAW_PREVIEW_CHARS: usize = 500;

/// Pull image bytes out of a generator result.
///
/// The `image` field may be a base64 string (optionally a `data:` URL)
/// or an array of byte values.
pub fn extract_image_bytes(raw: &Value) -> Result<Vec<u8>, CapabilityError> {
    let Some(field) = raw.as_object().and_then(|obj| obj.get(IMAGE_FIELD)) else {
        return Err(shape_error(
            format!("missing \"{}\" field", IMAGE_FIELD),
            raw,
        ));
    };

    let bytes = match field {
        Value::String(encoded) => decode_base64(encoded)
            .map_err(|e| shape_error(format!("invalid base64 image data ({})", e), raw))?,
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_u64().and_then(|n| u8::try_from(n).ok()))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| shape_error("image array must contain bytes", raw))?,
        _ => {
            return Err(shape_error(
                "image field must be a base64 string or byte array",
                raw,
            ));
        }
    };

    if bytes.is_empty() {
        return Err(shape_error("image field is empty", raw));
    }
    Ok(bytes)
}

fn decode_base64(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let data = match encoded.split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => encoded,
    };
    let compact: String = data.chars().filter(|c| !c.is_whitespace()).collect();
    STANDARD.decode(compact)
}

fn shape_error(reason: impl Into<String>, raw: &Value) -> CapabilityError {
    CapabilityError::unexpected_shape(
        Capability::ImageGeneration,
        format!("{} in {}", reason.into(), preview(raw)),
    )
}

fn preview(raw: &Value) -> String {
    let text = raw.to_string();
    if text.chars().count() <= RAW_PREVIEW_CHARS {
        return text;
    }
    let truncated: String = text.chars().take(RAW_PREVIEW_CHARS).collect();
    format!("{}...", truncated)
}
