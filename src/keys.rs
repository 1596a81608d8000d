//! RSA key generation and PEM interchange.
//!
//! Private keys are PKCS#1 DER under `RSA PRIVATE KEY`. Public keys are
//! SubjectPublicKeyInfo DER under the label chosen by [`PublicKeyLabel`];
//! decoding accepts either label.

use pem_rfc7468::LineEnding;
use rand::rngs::OsRng;
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey};
use rsa::pkcs8::{DecodePublicKey, EncodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};
use tracing::debug;
use zeroize::Zeroizing;

use crate::config::{KeyConfig, PublicKeyLabel};
use crate::errors::EnvelopeError;
use crate::types::{RecipientPriv, RecipientPub};

/// PEM-encoded RSA keypair.
pub struct KeyPair {
    pub public_pem: String,
    pub private_pem: Zeroizing<String>,
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_pem", &self.public_pem)
            .field("private_pem", &"[REDACTED]")
            .finish()
    }
}

/* ---------------- Keygen ---------------- */

/// Generate an RSA keypair sized and labeled according to `cfg`.
pub fn generate_keypair(cfg: &KeyConfig) -> Result<KeyPair, EnvelopeError> {
    cfg.validate()?;
    debug!(bits = cfg.rsa_bits, "generating RSA keypair");
    let private_key = RsaPrivateKey::new(&mut OsRng, cfg.rsa_bits)
        .map_err(|e| EnvelopeError::KeyGen(e.to_string()))?;
    let public_key = RsaPublicKey::from(&private_key);
    Ok(KeyPair {
        public_pem: encode_public_pem(&public_key, cfg.public_label)?,
        private_pem: encode_private_pem(&private_key)?,
    })
}

/// Generate a default-sized keypair bound to recipient `id`.
pub fn gen_recipient_keypair(id: &str) -> Result<(RecipientPub, RecipientPriv), EnvelopeError> {
    gen_recipient_keypair_with(id, &KeyConfig::default())
}

pub fn gen_recipient_keypair_with(
    id: &str,
    cfg: &KeyConfig,
) -> Result<(RecipientPub, RecipientPriv), EnvelopeError> {
    let pair = generate_keypair(cfg)?;
    Ok((
        RecipientPub {
            id: id.to_string(),
            public_pem: pair.public_pem,
        },
        RecipientPriv {
            id: id.to_string(),
            private_pem: pair.private_pem,
        },
    ))
}

/* ---------------- Encode ---------------- */

pub fn encode_private_pem(key: &RsaPrivateKey) -> Result<Zeroizing<String>, EnvelopeError> {
    key.to_pkcs1_pem(LineEnding::LF)
        .map_err(|e| EnvelopeError::KeyEncode(e.to_string()))
}

pub fn encode_public_pem(key: &RsaPublicKey, label: PublicKeyLabel) -> Result<String, EnvelopeError> {
    let der = key
        .to_public_key_der()
        .map_err(|e| EnvelopeError::KeyEncode(e.to_string()))?;
    pem_rfc7468::encode_string(label.as_str(), LineEnding::LF, der.as_bytes())
        .map_err(|e| EnvelopeError::KeyEncode(e.to_string()))
}

/* ---------------- Decode ---------------- */

pub fn decode_private_pem(pem: &str) -> Result<RsaPrivateKey, EnvelopeError> {
    RsaPrivateKey::from_pkcs1_pem(pem.trim())
        .map_err(|e| EnvelopeError::KeyDecode(format!("private key: {e}")))
}

pub fn decode_public_pem(pem: &str) -> Result<RsaPublicKey, EnvelopeError> {
    let (label, der) = pem_rfc7468::decode_vec(pem.trim().as_bytes())
        .map_err(|e| EnvelopeError::KeyDecode(format!("public key container: {e}")))?;

    let parsed = if label == PublicKeyLabel::Standard.as_str() {
        RsaPublicKey::from_public_key_der(&der).map_err(|e| e.to_string())
    } else if label == PublicKeyLabel::Legacy.as_str() {
        // Legacy label over SPKI first, then a genuine PKCS#1 body.
        RsaPublicKey::from_public_key_der(&der)
            .or_else(|_| RsaPublicKey::from_pkcs1_der(&der))
            .map_err(|e| e.to_string())
    } else {
        Err(format!("unexpected PEM label '{label}'"))
    };

    parsed.map_err(|reason| EnvelopeError::KeyDecode(format!("public key: {reason}")))
}
