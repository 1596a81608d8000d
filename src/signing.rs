//! RSASSA-PSS-SHA256 signatures over a message, its mode tag and inputs.

use std::collections::BTreeMap;

use rand::rngs::OsRng;
use rsa::pss::{Signature, SigningKey, VerifyingKey};
use rsa::signature::{RandomizedSigner, SignatureEncoding, Verifier};
use sha2::Sha256;
use tracing::debug;

use crate::encoding::{decode, encode};
use crate::errors::EnvelopeError;
use crate::keys::{decode_private_pem, decode_public_pem};
use crate::types::{Signed, MODE_RSA_PSS_SHA256};

/// Bytes covered by the signature.
///
/// Each field is prefixed by its big-endian u64 length, so no two distinct
/// `(mode, message, inputs)` triples share an encoding.
fn signing_input(mode: &str, message: &str, inputs: &BTreeMap<String, String>) -> Vec<u8> {
    fn put(out: &mut Vec<u8>, field: &[u8]) {
        out.extend_from_slice(&(field.len() as u64).to_be_bytes());
        out.extend_from_slice(field);
    }

    let mut out = Vec::new();
    put(&mut out, mode.as_bytes());
    put(&mut out, message.as_bytes());
    out.extend_from_slice(&(inputs.len() as u64).to_be_bytes());
    for (k, v) in inputs {
        put(&mut out, k.as_bytes());
        put(&mut out, v.as_bytes());
    }
    out
}

/// Sign `message` with a PKCS#1 private key PEM.
pub fn sign(message: &str, private_pem: &str) -> Result<Signed, EnvelopeError> {
    let private_key = decode_private_pem(private_pem)?;
    let signing_key = SigningKey::<Sha256>::new(private_key);

    let inputs = BTreeMap::new();
    let data = signing_input(MODE_RSA_PSS_SHA256, message, &inputs);
    let sig = signing_key
        .try_sign_with_rng(&mut OsRng, &data)
        .map_err(|e| EnvelopeError::Sign(e.to_string()))?;

    debug!(bytes = message.len(), "signed message");
    Ok(Signed {
        message: message.to_string(),
        mode: MODE_RSA_PSS_SHA256.to_string(),
        inputs,
        signature: encode(&sig.to_bytes()),
    })
}

/// Check `signed` against a public key PEM.
///
/// Returns `Ok(false)` when the signature is well formed but does not match;
/// errors are reserved for unknown modes and undecodable keys or fields.
pub fn verify(signed: &Signed, public_pem: &str) -> Result<bool, EnvelopeError> {
    if signed.mode != MODE_RSA_PSS_SHA256 {
        return Err(EnvelopeError::ModeMismatch {
            expected: MODE_RSA_PSS_SHA256,
            found: signed.mode.clone(),
        });
    }

    let public_key = decode_public_pem(public_pem)?;
    let verifying_key = VerifyingKey::<Sha256>::new(public_key);

    let sig_bytes = decode("signature", &signed.signature)?;
    let Ok(sig) = Signature::try_from(sig_bytes.as_slice()) else {
        return Ok(false);
    };

    let data = signing_input(&signed.mode, &signed.message, &signed.inputs);
    let ok = verifying_key.verify(&data, &sig).is_ok();
    debug!(ok, "verified signature");
    Ok(ok)
}
