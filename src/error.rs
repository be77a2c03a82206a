//! Custom error types for symkey
//!
//! This module defines the error hierarchy for the library and the CLI using
//! thiserror for ergonomic error definitions.

use thiserror::Error;

/// The main error type for symkey operations
#[derive(Error, Debug)]
pub enum SymkeyError {
    /// The secure random source failed to produce bytes
    #[error("Random source error: {0}")]
    RandomSource(String),

    /// Key material of the wrong length
    #[error("Invalid key: expected {expected} bytes, got {actual}")]
    InvalidKey { expected: usize, actual: usize },

    /// Text that is not validly encoded
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Ciphertext too short to carry a nonce
    #[error("Malformed ciphertext: {len} bytes is shorter than the nonce")]
    MalformedCiphertext { len: usize },

    /// Authentication tag did not verify.
    ///
    /// Carries no detail: wrong key, tampering and corruption are reported
    /// identically.
    #[error("Decryption failed: invalid key or corrupted data")]
    Authentication,

    /// The AEAD cipher could not be constructed or refused the input
    #[error("Cipher error: {0}")]
    Cipher(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SymkeyError {
    /// Create an "invalid key" error for material of `actual` bytes
    pub fn invalid_key_length(actual: usize) -> Self {
        Self::InvalidKey {
            expected: crate::crypto::KEY_SIZE,
            actual,
        }
    }

    /// Check if this is an authentication failure
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication)
    }

    /// Check if this is an invalid key error
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Self::InvalidKey { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SymkeyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SymkeyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<multibase::Error> for SymkeyError {
    fn from(err: multibase::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}

/// Result type alias for symkey operations
pub type SymkeyResult<T> = Result<T, SymkeyError>;
