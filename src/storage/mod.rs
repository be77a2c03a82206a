//! Storage layer for symkey
//!
//! Provides atomic file writes for settings and owner-only key files.

pub mod file_io;
pub mod key_file;

pub use file_io::{read_json, write_bytes_atomic, write_json_atomic, write_secret_atomic};
pub use key_file::{load_key, save_key};
