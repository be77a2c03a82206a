//! Cryptographic core for symkey
//!
//! Provides 256-bit [`Key`]s with a multibase text form and AES-256-GCM
//! encryption into `nonce || ciphertext || tag` blobs.

pub mod encryption;
pub mod key;

pub use encryption::{
    decrypt, decrypt_string, encrypt, encrypt_string, encrypt_with, sealed_len, NONCE_SIZE,
    TAG_SIZE,
};
pub use key::{Key, KEY_SIZE};
