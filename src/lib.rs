//! symkey - AES-256-GCM symmetric key envelope
//!
//! This library holds 256-bit keys, seals byte payloads into self-describing
//! `nonce || ciphertext || tag` blobs, and encodes keys as multibase text.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `crypto`: Keys and AES-256-GCM encryption
//! - `error`: Custom error types
//! - `config`: Configuration and path management for the CLI
//! - `storage`: Atomic file writes and key files
//! - `cli`: Command handlers for the `symkey` binary
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use symkey::crypto::Key;
//!
//! let key = Key::generate()?;
//! let blob = key.encrypt(b"hello")?;
//! assert_eq!(blob.len(), 12 + 5 + 16);
//!
//! let restored = Key::from_text(&key.to_text())?;
//! assert_eq!(restored.decrypt(&blob)?, b"hello");
//! # Ok::<(), symkey::SymkeyError>(())
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod logging;
pub mod storage;

pub use crypto::Key;
pub use error::{SymkeyError, SymkeyResult};
