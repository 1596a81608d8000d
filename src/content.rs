//! AES-256-CBC content encryption.
//!
//! Confidentiality only: there is no MAC, so a wrong key or a flipped
//! ciphertext bit decrypts to garbage unless the padding byte happens to
//! fall out of range.

use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::errors::EnvelopeError;
use crate::padding::{pad, unpad};
use crate::random::fill_random;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// AES block size in bytes; also the IV length.
pub const BLOCK_SIZE: usize = 16;

/// Content key length in bytes (AES-256).
pub const CONTENT_KEY_SIZE: usize = 32;

fn check_key(key: &[u8]) -> Result<(), EnvelopeError> {
    if key.len() != CONTENT_KEY_SIZE {
        return Err(EnvelopeError::CipherInit { len: key.len() });
    }
    Ok(())
}

/// Pad and encrypt `plaintext` under a fresh random IV.
///
/// Returns `(ciphertext, iv)`.
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<(Vec<u8>, [u8; BLOCK_SIZE]), EnvelopeError> {
    check_key(key)?;

    let mut iv = [0u8; BLOCK_SIZE];
    fill_random(&mut iv)?;

    let cipher = Aes256CbcEnc::new_from_slices(key, &iv)
        .map_err(|_| EnvelopeError::CipherInit { len: key.len() })?;
    let padded = pad(plaintext, BLOCK_SIZE);
    let ciphertext = cipher.encrypt_padded_vec_mut::<NoPadding>(&padded);
    Ok((ciphertext, iv))
}

/// Decrypt and unpad `ciphertext`.
pub fn decrypt(ciphertext: &[u8], iv: &[u8], key: &[u8]) -> Result<Vec<u8>, EnvelopeError> {
    check_key(key)?;
    if ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(EnvelopeError::SizeMismatch(
            "ciphertext is not a multiple of the block size",
        ));
    }
    if iv.len() != BLOCK_SIZE {
        return Err(EnvelopeError::SizeMismatch("iv is wrong size"));
    }

    let cipher = Aes256CbcDec::new_from_slices(key, iv)
        .map_err(|_| EnvelopeError::CipherInit { len: key.len() })?;
    let padded = cipher
        .decrypt_padded_vec_mut::<NoPadding>(ciphertext)
        .map_err(|_| EnvelopeError::SizeMismatch("ciphertext is not a multiple of the block size"))?;
    unpad(&padded)
}
