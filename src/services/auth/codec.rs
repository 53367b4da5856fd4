//! Base64 credential decoding.
//!
//! Every failure (missing input, invalid alphabet/padding, non UTF-8 payload)
//! collapses to `None`; nothing here panics.
use base64::{Engine, engine::general_purpose::STANDARD};

/// Decode a standard (padded) Base64 blob into UTF-8 text.
pub fn decode_base64(encoded: Option<&str>) -> Option<String> {
    let encoded = encoded?;

    let bytes = match STANDARD.decode(encoded) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::debug!(error = %err, "credential blob is not valid base64");
            return None;
        }
    };

    String::from_utf8(bytes)
        .map_err(|_| tracing::debug!("decoded credential is not valid utf-8"))
        .ok()
}
