//! Sealed-box encryption of secret values.
//!
//! GitHub expects secret values encrypted with the repository's Curve25519
//! public key using a libsodium `crypto_box_seal` sealed box:
//! `ephemeral_pk (32) || XSalsa20-Poly1305 ciphertext (len + 16)`, where the
//! nonce is derived from both public keys and never transmitted.

use base64::{Engine, engine::general_purpose};
use crypto_box::PublicKey;
use crypto_box::aead::OsRng;

use crate::constants::crypto::PUBLIC_KEY_LENGTH;
use crate::errors::EncryptError;

/// Decode a base64 repository public key into a Curve25519 key.
///
/// # Errors
///
/// Returns [`EncryptError::InvalidKeyEncoding`] when the input is not valid
/// base64 and [`EncryptError::InvalidKeyLength`] when it does not decode to
/// exactly 32 bytes.
pub fn decode_public_key(public_key_base64: &str) -> Result<PublicKey, EncryptError> {
    let bytes = general_purpose::STANDARD
        .decode(public_key_base64)
        .map_err(EncryptError::InvalidKeyEncoding)?;

    let key: [u8; PUBLIC_KEY_LENGTH] = bytes
        .try_into()
        .map_err(|bytes: Vec<u8>| EncryptError::InvalidKeyLength { got: bytes.len() })?;

    Ok(PublicKey::from(key))
}

/// Seal `plaintext` for the holder of `public_key_base64` and return the
/// sealed box base64-encoded.
///
/// A fresh ephemeral key pair is drawn from the operating system RNG on
/// every call, so sealing the same plaintext twice yields different output.
pub fn encrypt_secret(public_key_base64: &str, plaintext: &[u8]) -> Result<String, EncryptError> {
    let public_key = decode_public_key(public_key_base64)?;

    let sealed = public_key
        .seal(&mut OsRng, plaintext)
        .map_err(|_| EncryptError::SealFailed)?;

    Ok(general_purpose::STANDARD.encode(sealed))
}
