//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the crypto and storage layers.

pub mod crypt;
pub mod key;

pub use crypt::{handle_decrypt_command, handle_encrypt_command, CryptArgs};
pub use key::{handle_inspect_key_command, handle_keygen_command, KeyArgs, KeygenArgs};
