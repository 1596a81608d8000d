//! Artifact types and serialization utilities.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Mode tag for AES-256-CBC content encryption with RSA-OAEP-SHA256 key wrapping.
pub const MODE_AES_CBC_256_RSA: &str = "aes-cbc-256+rsa";

/// Mode tag for RSASSA-PSS-SHA256 signatures.
pub const MODE_RSA_PSS_SHA256: &str = "rsa-pss-sha256";

/// Name of the IV entry in [`Encrypted::inputs`].
pub const INPUT_IV: &str = "iv";

/// Recipient public key information.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipientPub {
    /// Recipient identifier (e.g., "alice").
    pub id: String,
    /// PEM-encoded RSA public key.
    pub public_pem: String,
}

/// Recipient private key holder. The PEM text is wiped on drop.
pub struct RecipientPriv {
    pub id: String,
    pub private_pem: Zeroizing<String>,
}

impl std::fmt::Debug for RecipientPriv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipientPriv")
            .field("id", &self.id)
            .field("private_pem", &"[REDACTED]")
            .finish()
    }
}

/// Output of group encryption.
///
/// Every binary field is standard padded base64. Field names serialize in
/// PascalCase so that documents written by earlier producers parse
/// unchanged; lowercase names are accepted on input.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Encrypted {
    /// Base64 AES-256-CBC ciphertext of the padded plaintext.
    #[serde(alias = "ciphertext")]
    pub ciphertext: String,
    /// Construction tag, e.g. [`MODE_AES_CBC_256_RSA`].
    #[serde(alias = "mode")]
    pub mode: String,
    /// Non-secret cipher parameters; currently only `"iv"`.
    #[serde(alias = "inputs", default)]
    pub inputs: BTreeMap<String, String>,
    /// Recipient identifier to base64 RSA-OAEP wrapped content key.
    #[serde(alias = "keys", default)]
    pub keys: BTreeMap<String, String>,
}

/// Output of [`crate::sign`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Signed {
    /// The signed message, verbatim.
    #[serde(alias = "message")]
    pub message: String,
    /// Signature scheme tag, e.g. [`MODE_RSA_PSS_SHA256`].
    #[serde(alias = "mode")]
    pub mode: String,
    /// Auxiliary parameters, covered by the signature.
    #[serde(alias = "inputs", default)]
    pub inputs: BTreeMap<String, String>,
    /// Base64 signature bytes.
    #[serde(alias = "signature")]
    pub signature: String,
}

macro_rules! artifact_codecs {
    ($ty:ty) => {
        impl $ty {
            pub fn to_json(&self) -> Result<String, crate::EnvelopeError> {
                serde_json::to_string(self).map_err(|e| crate::EnvelopeError::Ser(e.to_string()))
            }

            pub fn from_json(data: &str) -> Result<Self, crate::EnvelopeError> {
                serde_json::from_str(data).map_err(|e| crate::EnvelopeError::Ser(e.to_string()))
            }

            pub fn to_cbor(&self) -> Result<Vec<u8>, crate::EnvelopeError> {
                to_cbor_canonical(self)
            }

            pub fn from_cbor(data: &[u8]) -> Result<Self, crate::EnvelopeError> {
                from_cbor(data)
            }
        }
    };
}

artifact_codecs!(Encrypted);
artifact_codecs!(Signed);

/// Serialize a value to CBOR with a self-describe tag.
///
/// Map fields are `BTreeMap`s, so key order, and therefore the output, is
/// deterministic.
pub fn to_cbor_canonical<T: serde::Serialize>(v: &T) -> Result<Vec<u8>, crate::EnvelopeError> {
    let mut buf = Vec::new();
    let mut ser = serde_cbor::ser::Serializer::new(&mut buf);
    ser.self_describe()
        .map_err(|e| crate::EnvelopeError::Ser(e.to_string()))?;
    v.serialize(&mut ser)
        .map_err(|e| crate::EnvelopeError::Ser(e.to_string()))?;
    Ok(buf)
}

/// Deserialize a value from CBOR.
pub fn from_cbor<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T, crate::EnvelopeError> {
    serde_cbor::from_slice::<T>(data).map_err(|e| crate::EnvelopeError::Ser(e.to_string()))
}
