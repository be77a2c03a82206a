//! Key files
//!
//! A key file holds the multibase text form of a single [`Key`] followed by
//! a newline. Surrounding whitespace is ignored when reading.

use std::fs;
use std::path::Path;

use zeroize::Zeroizing;

use crate::crypto::Key;
use crate::error::{SymkeyError, SymkeyResult};

use super::file_io::write_secret_atomic;

/// Read a key from a key file
pub fn load_key<P: AsRef<Path>>(path: P) -> SymkeyResult<Key> {
    let path = path.as_ref();

    let contents = Zeroizing::new(fs::read_to_string(path).map_err(|e| {
        SymkeyError::Io(format!("Failed to read key file {}: {}", path.display(), e))
    })?);

    Key::from_text(contents.trim())
}

/// Write a key to a key file
///
/// Refuses to replace an existing file unless `overwrite` is set.
pub fn save_key<P: AsRef<Path>>(path: P, key: &Key, overwrite: bool) -> SymkeyResult<()> {
    let path = path.as_ref();

    if path.exists() && !overwrite {
        return Err(SymkeyError::Storage(format!(
            "Key file already exists: {}",
            path.display()
        )));
    }

    let mut text = Zeroizing::new(key.to_text());
    text.push('\n');
    write_secret_atomic(path, text.as_bytes())
}
