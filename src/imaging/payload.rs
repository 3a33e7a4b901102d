//! Base64 image payloads as sent by the editor
//!
//! The frontend posts canvases as data URIs (`data:image/png;base64,....`).
//! Bare base64 strings are accepted too.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::errors::{ImagingError, ImagingResult};

/// Strip a data-URI header, returning only the base64 body
pub fn strip_data_uri(data: &str) -> &str {
    match data.split_once(',') {
        Some((_, body)) => body,
        None => data,
    }
}

/// Decode an image or mask payload into raw bytes
///
/// `field` names the payload in error messages. Whitespace anywhere in the
/// body is ignored, so line-wrapped (MIME style) base64 decodes.
pub fn decode_payload(field: &'static str, data: &str) -> ImagingResult<Vec<u8>> {
    let body: String = strip_data_uri(data)
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    if body.is_empty() {
        return Err(ImagingError::EmptyPayload(field));
    }

    STANDARD
        .decode(&body)
        .map_err(|e| ImagingError::InvalidBase64 {
            field,
            reason: e.to_string(),
        })
}
