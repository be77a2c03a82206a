//! Encrypt/decrypt CLI commands
//!
//! Payloads are read from a file or stdin and written to a file or stdout.
//! Armored ciphertext is standard base64 followed by a newline. Output files
//! are replaced atomically; decrypted plaintext files are owner-only.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine};
use clap::Args;
use zeroize::Zeroizing;

use super::key::KeyArgs;
use crate::config::{paths::SymkeyPaths, settings::Settings};
use crate::crypto::{decrypt, encrypt};
use crate::error::{SymkeyError, SymkeyResult};
use crate::storage::{write_bytes_atomic, write_secret_atomic};

/// Arguments shared by `encrypt` and `decrypt`
#[derive(Args, Debug, Default)]
pub struct CryptArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    /// Input file (stdin if omitted or "-")
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (stdout if omitted or "-")
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Ciphertext is base64-armored text
    #[arg(short, long)]
    pub armor: bool,
}

impl CryptArgs {
    fn armored(&self, settings: &Settings) -> bool {
        self.armor || settings.armor
    }
}

/// Handle `encrypt`
pub fn handle_encrypt_command(
    paths: Option<&SymkeyPaths>,
    settings: &Settings,
    args: CryptArgs,
) -> SymkeyResult<()> {
    let key = args.key.resolve(paths, settings)?;
    let plaintext = Zeroizing::new(read_input(args.input.as_deref())?);

    let blob = encrypt(&plaintext, &key)?;
    tracing::debug!(
        plaintext_len = plaintext.len(),
        blob_len = blob.len(),
        "payload encrypted"
    );

    if args.armored(settings) {
        let mut text = STANDARD.encode(&blob);
        text.push('\n');
        write_output(args.output.as_deref(), text.as_bytes(), false)
    } else {
        write_output(args.output.as_deref(), &blob, false)
    }
}

/// Handle `decrypt`
pub fn handle_decrypt_command(
    paths: Option<&SymkeyPaths>,
    settings: &Settings,
    args: CryptArgs,
) -> SymkeyResult<()> {
    let key = args.key.resolve(paths, settings)?;
    let input = read_input(args.input.as_deref())?;

    let blob = if args.armored(settings) {
        dearmor(&input)?
    } else {
        input
    };

    let plaintext = Zeroizing::new(decrypt(&blob, &key)?);
    tracing::debug!(
        blob_len = blob.len(),
        plaintext_len = plaintext.len(),
        "payload decrypted"
    );

    write_output(args.output.as_deref(), &plaintext, true)
}

/// Decode base64-armored ciphertext
///
/// ASCII whitespace is ignored, so wrapped lines decode too.
pub fn dearmor(input: &[u8]) -> SymkeyResult<Vec<u8>> {
    let compact: Vec<u8> = input
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    STANDARD
        .decode(compact)
        .map_err(|e| SymkeyError::Encoding(format!("Invalid base64 ciphertext: {}", e)))
}

fn is_stdio(path: Option<&Path>) -> bool {
    path.map_or(true, |p| p.as_os_str() == "-")
}

fn read_input(path: Option<&Path>) -> SymkeyResult<Vec<u8>> {
    match path {
        Some(p) if !is_stdio(path) => fs::read(p).map_err(|e| {
            SymkeyError::Io(format!("Failed to read {}: {}", p.display(), e))
        }),
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .map_err(|e| SymkeyError::Io(format!("Failed to read stdin: {}", e)))?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, data: &[u8], secret: bool) -> SymkeyResult<()> {
    match path {
        Some(p) if !is_stdio(path) => {
            if secret {
                write_secret_atomic(p, data)
            } else {
                write_bytes_atomic(p, data)
            }
        }
        _ => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Key;
    use crate::storage::save_key;
    use tempfile::TempDir;

    fn setup() -> (TempDir, SymkeyPaths, Key) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SymkeyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let key = Key::generate().unwrap();
        save_key(paths.key_file(), &key, false).unwrap();
        (temp_dir, paths, key)
    }

    fn file_args(input: PathBuf, output: PathBuf, armor: bool) -> CryptArgs {
        CryptArgs {
            key: KeyArgs::default(),
            input: Some(input),
            output: Some(output),
            armor,
        }
    }

    #[test]
    fn test_encrypt_decrypt_files() {
        let (temp_dir, paths, key) = setup();
        let settings = Settings::default();
        let plain = temp_dir.path().join("plain.txt");
        let sealed = temp_dir.path().join("plain.txt.enc");
        let opened = temp_dir.path().join("opened.txt");
        fs::write(&plain, b"file payload").unwrap();

        handle_encrypt_command(Some(&paths), &settings, file_args(plain, sealed.clone(), false))
            .unwrap();

        let blob = fs::read(&sealed).unwrap();
        assert_eq!(blob.len(), crate::crypto::sealed_len(12));
        assert_eq!(decrypt(&blob, &key).unwrap(), b"file payload");

        handle_decrypt_command(Some(&paths), &settings, file_args(sealed, opened.clone(), false))
            .unwrap();
        assert_eq!(fs::read(&opened).unwrap(), b"file payload");
    }

    #[test]
    fn test_armor_from_settings() {
        let (temp_dir, paths, key) = setup();
        let settings = Settings {
            armor: true,
            ..Settings::default()
        };
        let plain = temp_dir.path().join("plain.txt");
        let sealed = temp_dir.path().join("sealed.b64");
        fs::write(&plain, b"armored").unwrap();

        handle_encrypt_command(Some(&paths), &settings, file_args(plain, sealed.clone(), false))
            .unwrap();

        let text = fs::read_to_string(&sealed).unwrap();
        assert!(text.ends_with('\n'));
        let blob = dearmor(text.as_bytes()).unwrap();
        assert_eq!(decrypt(&blob, &key).unwrap(), b"armored");
    }

    #[test]
    fn test_dearmor_ignores_line_wrapping() {
        let wrapped = b"aGVs\nbG8g\r\nd29y\nbGQ=\n";
        assert_eq!(dearmor(wrapped).unwrap(), b"hello world");
    }

    #[test]
    fn test_dearmor_rejects_garbage() {
        let err = dearmor(b"*** not base64 ***").unwrap_err();
        assert!(matches!(err, SymkeyError::Encoding(_)));
    }

    #[test]
    fn test_decrypt_with_wrong_key_writes_nothing() {
        let (temp_dir, paths, _key) = setup();
        let settings = Settings::default();
        let sealed = temp_dir.path().join("sealed.bin");
        let opened = temp_dir.path().join("opened.txt");

        let other = Key::generate().unwrap();
        fs::write(&sealed, encrypt(b"secret", &other).unwrap()).unwrap();

        let args = file_args(sealed, opened.clone(), false);
        let err = handle_decrypt_command(Some(&paths), &settings, args).unwrap_err();
        assert!(err.is_authentication());
        assert!(!opened.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_decrypted_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let (temp_dir, paths, key) = setup();
        let sealed = temp_dir.path().join("sealed.bin");
        let opened = temp_dir.path().join("opened.txt");
        fs::write(&sealed, encrypt(b"private", &key).unwrap()).unwrap();
        // An existing world-readable file is replaced, not reused
        fs::write(&opened, b"old").unwrap();
        fs::set_permissions(&opened, fs::Permissions::from_mode(0o644)).unwrap();

        let args = file_args(sealed, opened.clone(), false);
        handle_decrypt_command(Some(&paths), &Settings::default(), args).unwrap();

        assert_eq!(fs::read(&opened).unwrap(), b"private");
        let mode = fs::metadata(&opened).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert!(!temp_dir.path().join("opened.txt.tmp").exists());
    }

    #[test]
    fn test_inline_key_without_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let plain = temp_dir.path().join("plain.txt");
        let sealed = temp_dir.path().join("sealed.bin");
        fs::write(&plain, b"no config").unwrap();

        let key = Key::from([0u8; 32]);
        let args = CryptArgs {
            key: KeyArgs {
                key: Some(key.to_text()),
                key_file: None,
            },
            ..file_args(plain, sealed.clone(), false)
        };
        handle_encrypt_command(None, &Settings::default(), args).unwrap();

        assert_eq!(decrypt(&fs::read(&sealed).unwrap(), &key).unwrap(), b"no config");
    }

    #[test]
    fn test_stdio_detection() {
        assert!(is_stdio(None));
        assert!(is_stdio(Some(Path::new("-"))));
        assert!(!is_stdio(Some(Path::new("out.bin"))));
    }
}
