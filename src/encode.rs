//! Base64 encoding/decoding and data URI plumbing

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::errors::MediaError;

/// Separates the MIME prefix of a data URI from its base64 payload.
const BASE64_MARKER: &str = ";base64,";

/// Encode bytes to base64 string
pub fn to_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode base64 string to bytes
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, MediaError> {
    Ok(STANDARD.decode(encoded)?)
}

/// Extract the base64 payload from a data URI.
///
/// Everything before the first `;base64,` marker is ignored; the MIME
/// hint in the prefix is never validated against the payload.
pub(crate) fn data_uri_payload(uri: &str) -> Result<&str, MediaError> {
    match uri.find(BASE64_MARKER) {
        Some(idx) => Ok(&uri[idx + BASE64_MARKER.len()..]),
        None => Err(MediaError::InvalidImage),
    }
}

/// Wrap a base64 payload as an image data URI.
///
/// `ext_with_dot` is spliced in verbatim, leading dot included, so a
/// `.txt` extension yields `data:image/.txt;base64,...`.
pub fn wrap_data_uri(ext_with_dot: &str, payload: &str) -> String {
    format!("data:image/{};base64,{}", ext_with_dot, payload)
}
