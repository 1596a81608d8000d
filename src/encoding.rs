//! Standard padded base64 for every binary field of an artifact.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::errors::EnvelopeError;

pub fn encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode `s`, naming `field` in the error so callers can tell which part
/// of an artifact was damaged.
pub fn decode(field: &'static str, s: &str) -> Result<Vec<u8>, EnvelopeError> {
    STANDARD.decode(s).map_err(|e| EnvelopeError::Encoding {
        field,
        reason: e.to_string(),
    })
}
