//! Key CLI commands
//!
//! Generating and inspecting keys.

use std::path::PathBuf;

use clap::Args;
use zeroize::Zeroizing;

use crate::config::{paths::SymkeyPaths, settings::Settings};
use crate::crypto::{Key, KEY_SIZE};
use crate::error::SymkeyResult;
use crate::storage::{load_key, save_key};

/// Where to take the key from
#[derive(Args, Debug, Default, Clone)]
pub struct KeyArgs {
    /// Key in multibase text form
    #[arg(short, long, env = "SYMKEY_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Read the key from this file
    #[arg(short = 'f', long, value_name = "FILE")]
    pub key_file: Option<PathBuf>,
}

impl KeyArgs {
    /// Resolve the key
    ///
    /// Order: `--key`, `--key-file`, the settings key file, then the default
    /// key file in the config directory. `paths` is only needed for the last.
    pub fn resolve(&self, paths: Option<&SymkeyPaths>, settings: &Settings) -> SymkeyResult<Key> {
        if let Some(text) = &self.key {
            tracing::debug!("using key from command line");
            return Key::from_text(&Zeroizing::new(text.clone()));
        }

        let path = match &self.key_file {
            Some(path) => path.clone(),
            None => settings.resolve_key_file(paths)?,
        };
        tracing::debug!(path = %path.display(), "loading key file");
        load_key(path)
    }
}

/// Arguments for `keygen`
#[derive(Args, Debug, Default)]
pub struct KeygenArgs {
    /// Write the key to this file instead of the configured key file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Replace an existing key file
    #[arg(long)]
    pub force: bool,

    /// Print the key to stdout instead of writing a file
    #[arg(long, conflicts_with_all = ["output", "force"])]
    pub stdout: bool,
}

/// Handle `keygen`
pub fn handle_keygen_command(
    paths: Option<&SymkeyPaths>,
    settings: &Settings,
    args: KeygenArgs,
) -> SymkeyResult<()> {
    let key = Key::generate()?;

    if args.stdout {
        println!("{}", key);
        return Ok(());
    }

    let path = match args.output {
        Some(path) => path,
        None => settings.resolve_key_file(paths)?,
    };
    save_key(&path, &key, args.force)?;

    tracing::info!(path = %path.display(), "key written");
    println!("Key written to {}", path.display());

    Ok(())
}

/// Handle `inspect-key`
///
/// Prints the canonical text form. Raw bytes are never printed.
pub fn handle_inspect_key_command(
    paths: Option<&SymkeyPaths>,
    settings: &Settings,
    args: KeyArgs,
) -> SymkeyResult<()> {
    let key = args.resolve(paths, settings)?;

    println!("Key: {}", key);
    println!("  Length: {} bytes", KEY_SIZE);
    println!("  Encoding: multibase base32 (lowercase)");

    Ok(())
}
