//! PKCS#7-style block padding.
//!
//! `pad` always appends between 1 and `block_size` bytes, each holding the
//! pad length, so block-aligned input gains a whole extra block. `unpad`
//! trusts the trailing byte: it only checks that the length is in range and
//! does not compare the removed bytes. Existing artifacts depend on both
//! behaviors.

use crate::errors::EnvelopeError;

/// Append `k = block_size - len % block_size` bytes of value `k`.
///
/// `block_size` must be in `1..=255`; the content cipher always passes 16.
pub fn pad(data: &[u8], block_size: usize) -> Vec<u8> {
    debug_assert!((1..=255).contains(&block_size));
    let k = block_size - data.len() % block_size;
    let mut out = Vec::with_capacity(data.len() + k);
    out.extend_from_slice(data);
    out.resize(data.len() + k, k as u8);
    out
}

/// Strip the padding length announced by the last byte.
pub fn unpad(data: &[u8]) -> Result<Vec<u8>, EnvelopeError> {
    let Some(&last) = data.last() else {
        return Err(EnvelopeError::InvalidPadding);
    };
    let k = last as usize;
    if k == 0 || k > data.len() {
        return Err(EnvelopeError::InvalidPadding);
    }
    Ok(data[..data.len() - k].to_vec())
}
