//! Cryptographically secure random bytes.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::errors::EnvelopeError;

/// Return exactly `n` bytes from the operating system CSPRNG.
///
/// `OsRng` is stateless, so concurrent callers never share generator state.
pub fn random_bytes(n: usize) -> Result<Vec<u8>, EnvelopeError> {
    let mut buf = vec![0u8; n];
    fill_random(&mut buf)?;
    Ok(buf)
}

/// Fill `buf` from the operating system CSPRNG.
pub fn fill_random(buf: &mut [u8]) -> Result<(), EnvelopeError> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| EnvelopeError::Randomness(e.to_string()))
}
