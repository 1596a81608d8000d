//! RSA-OAEP (SHA-256, empty label) wrapping of the content key.

use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::errors::EnvelopeError;

/// SHA-256 digest length used by OAEP.
pub const HASH_SIZE: usize = 32;

/// Largest payload OAEP can wrap under `public_key`: `k - 2*hLen - 2`.
pub fn wrap_capacity(public_key: &RsaPublicKey) -> usize {
    public_key.size().saturating_sub(2 * HASH_SIZE + 2)
}

/// Encrypt `content_key` for `recipient`.
pub fn wrap(
    recipient: &str,
    content_key: &[u8],
    public_key: &RsaPublicKey,
) -> Result<Vec<u8>, EnvelopeError> {
    let capacity = wrap_capacity(public_key);
    if content_key.len() > capacity {
        return Err(EnvelopeError::RecipientEncrypt {
            recipient: recipient.to_string(),
            reason: format!(
                "content key is {} bytes, key-wrap capacity is {capacity}",
                content_key.len()
            ),
        });
    }
    public_key
        .encrypt(&mut OsRng, Oaep::new::<Sha256>(), content_key)
        .map_err(|e| EnvelopeError::RecipientEncrypt {
            recipient: recipient.to_string(),
            reason: e.to_string(),
        })
}

/// Recover a wrapped content key. Any OAEP failure is reported as `Unwrap`.
pub fn unwrap(
    wrapped: &[u8],
    private_key: &RsaPrivateKey,
) -> Result<Zeroizing<Vec<u8>>, EnvelopeError> {
    private_key
        .decrypt_blinded(&mut OsRng, Oaep::new::<Sha256>(), wrapped)
        .map(Zeroizing::new)
        .map_err(|_| EnvelopeError::Unwrap)
}
