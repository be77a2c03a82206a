use anyhow::Result;
use clap::{Parser, Subcommand};

use symkey::cli::{
    handle_decrypt_command, handle_encrypt_command, handle_inspect_key_command,
    handle_keygen_command, CryptArgs, KeyArgs, KeygenArgs,
};
use symkey::config::{paths::SymkeyPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "symkey",
    version,
    about = "AES-256-GCM encryption with self-describing keys",
    long_about = "symkey generates 256-bit keys, stores them as multibase text, \
                  and encrypts payloads into nonce || ciphertext || tag blobs."
)]
struct Cli {
    /// Enable debug logging (overridden by SYMKEY_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new random key
    Keygen(KeygenArgs),

    /// Encrypt a payload
    #[command(alias = "seal")]
    Encrypt(CryptArgs),

    /// Decrypt a payload
    #[command(alias = "open")]
    Decrypt(CryptArgs),

    /// Show the canonical text form of a key
    InspectKey(KeyArgs),

    /// Create the config directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    symkey::logging::init(cli.verbose);

    // Only commands that fall back to the config directory require it
    let paths = SymkeyPaths::new();
    let settings = match &paths {
        Ok(paths) => Settings::load_or_create(paths)?,
        Err(e) => {
            tracing::debug!(error = %e, "config directory unavailable, using default settings");
            Settings::default()
        }
    };

    match cli.command {
        Some(Commands::Keygen(args)) => {
            handle_keygen_command(paths.as_ref().ok(), &settings, args)?
        }
        Some(Commands::Encrypt(args)) => {
            handle_encrypt_command(paths.as_ref().ok(), &settings, args)?
        }
        Some(Commands::Decrypt(args)) => {
            handle_decrypt_command(paths.as_ref().ok(), &settings, args)?
        }
        Some(Commands::InspectKey(args)) => {
            handle_inspect_key_command(paths.as_ref().ok(), &settings, args)?
        }
        Some(Commands::Init) => {
            let paths = paths?;
            if paths.is_initialized() {
                println!("Already initialized at: {}", paths.base_dir().display());
            } else {
                settings.save(&paths)?;
                tracing::info!(path = %paths.settings_file().display(), "settings created");
                println!("Initialized symkey at: {}", paths.base_dir().display());
                println!();
                println!("Run 'symkey keygen' to create your key.");
            }
        }
        Some(Commands::Config) => {
            let paths = paths?;
            let key_file = settings.resolve_key_file(Some(&paths))?;
            println!("symkey Configuration");
            println!("====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Key file:         {}", key_file.display());
            println!();
            println!("Settings:");
            println!("  Armor ciphertext: {}", settings.armor);
        }
        None => {
            println!("symkey - AES-256-GCM encryption with self-describing keys");
            println!();
            println!("Run 'symkey --help' for usage information.");
        }
    }

    Ok(())
}
