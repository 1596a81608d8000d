//! Key generation and key codec settings.

use serde::{Deserialize, Serialize};

use crate::errors::EnvelopeError;

/// Smallest RSA modulus accepted for new keys.
pub const MIN_RSA_BITS: usize = 2048;

/// PEM label written around encoded public keys.
///
/// The body is always SubjectPublicKeyInfo DER. `Legacy` reproduces the
/// `RSA PUBLIC KEY` label that existing artifacts carry even though that
/// label normally denotes PKCS#1; `Standard` writes `PUBLIC KEY`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PublicKeyLabel {
    #[default]
    Legacy,
    Standard,
}

impl PublicKeyLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublicKeyLabel::Legacy => "RSA PUBLIC KEY",
            PublicKeyLabel::Standard => "PUBLIC KEY",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyConfig {
    /// RSA modulus size for generated keys.
    pub rsa_bits: usize,
    /// Label used when encoding public keys.
    pub public_label: PublicKeyLabel,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            rsa_bits: MIN_RSA_BITS,
            public_label: PublicKeyLabel::default(),
        }
    }
}

impl KeyConfig {
    /// Parse and validate a JSON document; absent fields take defaults.
    pub fn from_json(data: &str) -> Result<Self, EnvelopeError> {
        let cfg: KeyConfig =
            serde_json::from_str(data).map_err(|e| EnvelopeError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), EnvelopeError> {
        if self.rsa_bits < MIN_RSA_BITS {
            return Err(EnvelopeError::Config(format!(
                "rsa_bits {} is below the minimum of {MIN_RSA_BITS}",
                self.rsa_bits
            )));
        }
        if self.rsa_bits % 8 != 0 {
            return Err(EnvelopeError::Config(format!(
                "rsa_bits {} is not a multiple of 8",
                self.rsa_bits
            )));
        }
        Ok(())
    }
}
