//! AES-256-GCM encryption/decryption
//!
//! Produces self-describing ciphertext blobs laid out as
//! `nonce (12) || ciphertext || tag (16)`. Each encryption draws a fresh
//! random nonce; a nonce must never repeat under the same key.

use aes_gcm::aead::rand_core::{CryptoRng, RngCore};
use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Nonce};

use crate::error::{SymkeyError, SymkeyResult};

use super::Key;

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// Size of the AES-GCM authentication tag in bytes
pub const TAG_SIZE: usize = 16;

/// Length of the blob produced for a plaintext of `plaintext_len` bytes
pub const fn sealed_len(plaintext_len: usize) -> usize {
    NONCE_SIZE + plaintext_len + TAG_SIZE
}

fn cipher_for(key: &Key) -> SymkeyResult<Aes256Gcm> {
    Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| SymkeyError::Cipher(format!("Failed to create cipher: {}", e)))
}

/// Encrypt plaintext using AES-256-GCM
///
/// The nonce comes from the OS random source.
pub fn encrypt(plaintext: &[u8], key: &Key) -> SymkeyResult<Vec<u8>> {
    encrypt_with(plaintext, key, &mut OsRng)
}

/// Encrypt plaintext using AES-256-GCM, drawing the nonce from `rng`
pub fn encrypt_with<R>(plaintext: &[u8], key: &Key, rng: &mut R) -> SymkeyResult<Vec<u8>>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let cipher = cipher_for(key)?;

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    rng.try_fill_bytes(&mut nonce_bytes)
        .map_err(|e| SymkeyError::RandomSource(e.to_string()))?;

    let sealed = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), plaintext)
        .map_err(|_| SymkeyError::Cipher("Plaintext too long for AES-GCM".to_string()))?;

    let mut blob = Vec::with_capacity(NONCE_SIZE + sealed.len());
    blob.extend_from_slice(&nonce_bytes);
    blob.extend_from_slice(&sealed);
    Ok(blob)
}

/// Decrypt a blob produced by [`encrypt`]
pub fn decrypt(blob: &[u8], key: &Key) -> SymkeyResult<Vec<u8>> {
    if blob.len() < NONCE_SIZE {
        return Err(SymkeyError::MalformedCiphertext { len: blob.len() });
    }

    let cipher = cipher_for(key)?;
    let (nonce, sealed) = blob.split_at(NONCE_SIZE);

    cipher
        .decrypt(Nonce::from_slice(nonce), sealed)
        .map_err(|_| SymkeyError::Authentication)
}

/// Encrypt a string
pub fn encrypt_string(plaintext: &str, key: &Key) -> SymkeyResult<Vec<u8>> {
    encrypt(plaintext.as_bytes(), key)
}

/// Decrypt to a string
pub fn decrypt_string(blob: &[u8], key: &Key) -> SymkeyResult<String> {
    let plaintext = decrypt(blob, key)?;
    String::from_utf8(plaintext)
        .map_err(|e| SymkeyError::Encoding(format!("Invalid UTF-8 in decrypted data: {}", e)))
}

impl Key {
    /// Encrypt `plaintext` under this key. See [`encrypt`].
    pub fn encrypt(&self, plaintext: &[u8]) -> SymkeyResult<Vec<u8>> {
        encrypt(plaintext, self)
    }

    /// Decrypt `blob` under this key. See [`decrypt`].
    pub fn decrypt(&self, blob: &[u8]) -> SymkeyResult<Vec<u8>> {
        decrypt(blob, self)
    }
}
