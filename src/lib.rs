//! # group-envelope
//!
//! Multi-recipient ("group") envelope encryption. A message is encrypted once
//! under a fresh 256-bit content key, and that key is wrapped separately for
//! each recipient's RSA public key. Any recipient recovers the plaintext with
//! only their own private key.
//!
//! ## Construction (`aes-cbc-256+rsa`)
//!
//! - **Content:** AES-256-CBC, PKCS#7-style padding, random 16-byte IV
//! - **Key wrapping:** RSA-OAEP with SHA-256 and an empty label
//! - **Keys:** PEM (PKCS#1 private, SubjectPublicKeyInfo public)
//! - **Artifact:** [`Encrypted`], every binary field standard base64
//!
//! ## Example
//!
//! ```rust,no_run
//! use group_envelope::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let (alice_pub, alice_priv) = gen_recipient_keypair("alice")?;
//! let (bob_pub, bob_priv) = gen_recipient_keypair("bob")?;
//!
//! let encrypted = group_encrypt_for(b"hello world", &[alice_pub, bob_pub])?;
//! assert_eq!(encrypted.mode, MODE_AES_CBC_256_RSA);
//!
//! assert_eq!(group_decrypt_as(&encrypted, &alice_priv)?, b"hello world");
//! assert_eq!(group_decrypt_as(&encrypted, &bob_priv)?, b"hello world");
//! # Ok(())
//! # }
//! ```
//!
//! ## Security Considerations
//!
//! - The construction provides confidentiality only. There is no MAC over the
//!   ciphertext, so tampering is not reliably detected.
//! - Content keys are generated from the OS CSPRNG per call and zeroized when
//!   the call returns; nothing is cached between calls.
//! - [`sign`] / [`verify`] (RSASSA-PSS-SHA256) are independent of the
//!   envelope and do not authenticate an [`Encrypted`] artifact.
//!
//! ## License
//!
//! Licensed under the Apache License, Version 2.0.

mod config;
mod crypto;
mod errors;
mod keys;
mod signing;
mod types;

pub mod content;
pub mod encoding;
pub mod keywrap;
pub mod padding;
pub mod random;

pub use config::*;
pub use crypto::*;
pub use errors::EnvelopeError;
pub use keys::*;
pub use signing::{sign, verify};
pub use types::*;
