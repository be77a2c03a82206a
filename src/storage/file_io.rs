//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::SymkeyError;

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, SymkeyError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| SymkeyError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| SymkeyError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), SymkeyError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let json = serde_json::to_vec_pretty(data)
        .map_err(|e| SymkeyError::Storage(format!("Failed to serialize data: {}", e)))?;
    write_atomic(path.as_ref(), &json, None)
}

/// Write bytes to a file atomically with default permissions
pub fn write_bytes_atomic<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<(), SymkeyError> {
    write_atomic(path.as_ref(), contents, None)
}

/// Write secret material atomically, readable by the owner only
///
/// On Unix the file is created with mode `0600` before any byte is written.
pub fn write_secret_atomic<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<(), SymkeyError> {
    write_atomic(path.as_ref(), contents, Some(0o600))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(unix)]
fn apply_mode(options: &mut OpenOptions, mode: Option<u32>) {
    use std::os::unix::fs::OpenOptionsExt;
    if let Some(mode) = mode {
        options.mode(mode);
    }
}

#[cfg(not(unix))]
fn apply_mode(_options: &mut OpenOptions, _mode: Option<u32>) {}

fn write_atomic(path: &Path, contents: &[u8], mode: Option<u32>) -> Result<(), SymkeyError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            SymkeyError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file lives in the same directory so the rename stays atomic
    let temp_path = temp_path_for(path);

    // A leftover temp file would keep its old mode, so always start fresh
    match fs::remove_file(&temp_path) {
        Ok(()) => tracing::debug!(path = %temp_path.display(), "removed stale temp file"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(SymkeyError::Storage(format!(
                "Failed to remove stale temp file {}: {}",
                temp_path.display(),
                e
            )))
        }
    }

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    apply_mode(&mut options, mode);

    let file = options
        .open(&temp_path)
        .map_err(|e| SymkeyError::Storage(format!("Failed to create temp file: {}", e)))?;

    // Once the temp file exists, every failure removes it
    write_and_sync(file, contents)
        .and_then(|()| {
            fs::rename(&temp_path, path)
                .map_err(|e| SymkeyError::Storage(format!("Failed to rename temp file: {}", e)))
        })
        .map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            e
        })
}

fn write_and_sync(file: File, contents: &[u8]) -> Result<(), SymkeyError> {
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents)
        .map_err(|e| SymkeyError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| SymkeyError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| SymkeyError::Storage(format!("Failed to sync data: {}", e)))
}
