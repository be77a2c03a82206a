//! 256-bit symmetric keys
//!
//! A [`Key`] always holds exactly [`KEY_SIZE`] bytes. Keys are created from
//! the OS random source, from raw bytes, or from their multibase text form,
//! and are zeroed when dropped.

use std::fmt;
use std::str::FromStr;

use aes_gcm::aead::rand_core::{CryptoRng, RngCore};
use aes_gcm::aead::OsRng;
use multibase::Base;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{SymkeyError, SymkeyResult};

/// Size of an AES-256 key in bytes
pub const KEY_SIZE: usize = 32;

/// Base used when rendering a key as text
const TEXT_BASE: Base = Base::Base32Lower;

/// An AES-256-GCM key
#[derive(Clone, PartialEq, Eq, ZeroizeOnDrop)]
pub struct Key {
    raw: [u8; KEY_SIZE],
}

impl Key {
    /// Generate a random key from the OS random source
    pub fn generate() -> SymkeyResult<Self> {
        Self::generate_with(&mut OsRng)
    }

    /// Generate a random key from an explicit random source
    ///
    /// Errors from the source are returned as [`SymkeyError::RandomSource`]
    /// and never retried.
    pub fn generate_with<R>(rng: &mut R) -> SymkeyResult<Self>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let mut raw = [0u8; KEY_SIZE];
        rng.try_fill_bytes(&mut raw)
            .map_err(|e| SymkeyError::RandomSource(e.to_string()))?;
        Ok(Self { raw })
    }

    /// Generate a random key, panicking if the OS random source fails
    ///
    /// Meant for start-up code with no way to recover. Library code should
    /// call [`Key::generate`] and propagate the error.
    #[track_caller]
    pub fn generate_or_abort() -> Self {
        match Self::generate() {
            Ok(key) => key,
            Err(e) => panic!("cannot generate key: {}", e),
        }
    }

    /// Build a key from exactly [`KEY_SIZE`] raw bytes
    pub fn from_bytes(bytes: &[u8]) -> SymkeyResult<Self> {
        let raw: [u8; KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| SymkeyError::invalid_key_length(bytes.len()))?;
        Ok(Self { raw })
    }

    /// Decode a key from its multibase text form
    ///
    /// Any base known to the multibase registry is accepted; the decoded
    /// payload must be exactly [`KEY_SIZE`] bytes. Surrounding whitespace is
    /// an encoding error.
    pub fn from_text(text: &str) -> SymkeyResult<Self> {
        let (_, mut bytes) = multibase::decode(text)?;
        let key = Self::from_bytes(&bytes);
        bytes.zeroize();
        key
    }

    /// Get the raw key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.raw
    }

    /// Get an owned copy of the raw key bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.raw.to_vec()
    }

    /// Encode the key as lowercase base32 multibase text
    pub fn to_text(&self) -> String {
        multibase::encode(TEXT_BASE, self.raw)
    }
}

impl From<[u8; KEY_SIZE]> for Key {
    fn from(raw: [u8; KEY_SIZE]) -> Self {
        Self { raw }
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = SymkeyError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl FromStr for Key {
    type Err = SymkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

// Don't print key material in Debug output
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key").field("len", &KEY_SIZE).finish()
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_text())
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_text(&text).map_err(serde::de::Error::custom)
    }
}
