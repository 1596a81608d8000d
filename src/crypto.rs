use std::collections::BTreeMap;

use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::content::{self, CONTENT_KEY_SIZE};
use crate::encoding::{decode, encode};
use crate::errors::EnvelopeError;
use crate::keys::{decode_private_pem, decode_public_pem};
use crate::keywrap;
use crate::random::fill_random;
use crate::types::*;

/* ---------------- Encrypt ---------------- */

/// Encrypt `plaintext` once and wrap the content key for every recipient.
///
/// `recipients` yields `(identifier, public key PEM)` pairs; any map or
/// slice of pairs works. The call is all-or-nothing: a malformed key or a
/// failed wrap for any recipient returns an error and no artifact.
pub fn group_encrypt<I, K, V>(plaintext: &[u8], recipients: I) -> Result<Encrypted, EnvelopeError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: AsRef<str>,
{
    // CEK
    let mut cek = Zeroizing::new([0u8; CONTENT_KEY_SIZE]);
    fill_random(cek.as_mut_slice())?;

    // Payload
    let (ciphertext, iv) = content::encrypt(plaintext, cek.as_slice())?;

    // Wrapped keys (one per recipient)
    let mut keys = BTreeMap::new();
    for (id, public_pem) in recipients {
        let id: String = id.into();
        if keys.contains_key(&id) {
            return Err(EnvelopeError::DuplicateRecipient(id));
        }
        let public_key = decode_public_pem(public_pem.as_ref()).map_err(|e| match e {
            EnvelopeError::KeyDecode(reason) => {
                EnvelopeError::KeyDecode(format!("recipient {id}: {reason}"))
            }
            other => other,
        })?;
        let wrapped = keywrap::wrap(&id, cek.as_slice(), &public_key)?;
        trace!(recipient = %id, "wrapped content key");
        keys.insert(id, encode(&wrapped));
    }
    if keys.is_empty() {
        return Err(EnvelopeError::NoRecipients);
    }

    let mut inputs = BTreeMap::new();
    inputs.insert(INPUT_IV.to_string(), encode(&iv));

    debug!(recipients = keys.len(), bytes = plaintext.len(), "group encrypted");
    Ok(Encrypted {
        ciphertext: encode(&ciphertext),
        mode: MODE_AES_CBC_256_RSA.to_string(),
        inputs,
        keys,
    })
}

/// [`group_encrypt`] over a list of [`RecipientPub`].
pub fn group_encrypt_for(
    plaintext: &[u8],
    recipients: &[RecipientPub],
) -> Result<Encrypted, EnvelopeError> {
    group_encrypt(
        plaintext,
        recipients
            .iter()
            .map(|r| (r.id.as_str(), r.public_pem.as_str())),
    )
}

/* ---------------- Decrypt ---------------- */

/// Recover the plaintext as `recipient_id` using their PKCS#1 private key PEM.
///
/// Without a MAC, a validly unwrapped key over tampered ciphertext can
/// still return wrong bytes; only OAEP and padding failures are detected.
pub fn group_decrypt(
    encrypted: &Encrypted,
    recipient_id: &str,
    private_pem: &str,
) -> Result<Vec<u8>, EnvelopeError> {
    if encrypted.mode != MODE_AES_CBC_256_RSA {
        return Err(EnvelopeError::ModeMismatch {
            expected: MODE_AES_CBC_256_RSA,
            found: encrypted.mode.clone(),
        });
    }

    let wrapped_b64 = encrypted
        .keys
        .get(recipient_id)
        .ok_or_else(|| EnvelopeError::RecipientNotFound(recipient_id.to_string()))?;
    let iv_b64 = encrypted
        .inputs
        .get(INPUT_IV)
        .ok_or(EnvelopeError::MissingInput(INPUT_IV))?;

    let ciphertext = decode("ciphertext", &encrypted.ciphertext)?;
    let iv = decode("iv", iv_b64)?;
    let wrapped = decode("key", wrapped_b64)?;

    let private_key = decode_private_pem(private_pem)?;
    let cek = keywrap::unwrap(&wrapped, &private_key)?;

    let plaintext = content::decrypt(&ciphertext, &iv, &cek)?;
    debug!(recipient = %recipient_id, bytes = plaintext.len(), "group decrypted");
    Ok(plaintext)
}

/// [`group_decrypt`] with a [`RecipientPriv`] holder.
pub fn group_decrypt_as(
    encrypted: &Encrypted,
    recipient: &RecipientPriv,
) -> Result<Vec<u8>, EnvelopeError> {
    group_decrypt(encrypted, &recipient.id, &recipient.private_pem)
}
