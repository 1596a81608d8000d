//! Error types for group-envelope operations.

use thiserror::Error;

/// Errors that can occur while encrypting, decrypting, signing, or (de)serializing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnvelopeError {
    /// The operating system entropy source could not produce random bytes.
    #[error("randomness source failure: {0}")]
    Randomness(String),

    /// The content key is not 32 bytes long.
    #[error("invalid content key length {len} (expected 32)")]
    CipherInit { len: usize },

    /// Ciphertext is not block aligned or the IV is not exactly one block.
    #[error("size mismatch: {0}")]
    SizeMismatch(&'static str),

    /// The trailing padding byte is zero or longer than the data itself.
    #[error("invalid padding")]
    InvalidPadding,

    /// A PEM container or the DER key inside it is missing or malformed.
    #[error("key decode failure: {0}")]
    KeyDecode(String),

    /// A key could not be serialized to PEM.
    #[error("key encode failure: {0}")]
    KeyEncode(String),

    /// RSA key generation failed.
    #[error("key generation failure: {0}")]
    KeyGen(String),

    /// Wrapping the content key for a recipient failed.
    #[error("cannot encrypt content key for recipient {recipient}: {reason}")]
    RecipientEncrypt { recipient: String, reason: String },

    /// No wrapped key exists for the requested recipient.
    #[error("no wrapped key for recipient {0}")]
    RecipientNotFound(String),

    /// The artifact was produced by a construction this crate does not implement.
    #[error("invalid mode '{found}' (expected '{expected}')")]
    ModeMismatch {
        expected: &'static str,
        found: String,
    },

    /// OAEP validation failed: wrong private key or tampered wrapped key.
    #[error("content key unwrap failed")]
    Unwrap,

    /// A text-encoded field is not valid base64.
    #[error("cannot decode field {field}: {reason}")]
    Encoding { field: &'static str, reason: String },

    /// A required cipher parameter is absent from `inputs`.
    #[error("missing input: {0}")]
    MissingInput(&'static str),

    /// Encryption was requested for an empty recipient set.
    #[error("no recipients")]
    NoRecipients,

    /// The same recipient identifier was supplied twice.
    #[error("duplicate recipient {0}")]
    DuplicateRecipient(String),

    /// Signature creation failed.
    #[error("signing failure: {0}")]
    Sign(String),

    /// Configuration value out of range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// JSON or CBOR serialization or deserialization error.
    #[error("serialization error: {0}")]
    Ser(String),
}
