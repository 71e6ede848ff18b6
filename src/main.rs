use clap::{Parser, Subcommand};
use rand::RngCore;
use rijn::codec::{decrypt_file, encrypt_file};
use rijn::error::{Result, RijnError};
use rijn::KEY_SIZE;
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("RIJN_VERSION");
const BUILD: &str = env!("RIJN_BUILD");
const PROFILE: &str = env!("RIJN_PROFILE");
const GIT_HASH: &str = env!("RIJN_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "rijn")]
#[command(author, about = "Teaching-grade AES-128 file encryption", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file (note: pads the input file in place first)
    #[command(alias = "e")]
    Encrypt {
        /// 16-byte key as 32 hex characters
        #[arg(long, required = true)]
        key: String,

        /// File to encrypt; grows by 8-23 padding bytes
        input: PathBuf,

        /// Output file (defaults to <INPUT>.aes)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Decrypt a file
    #[command(alias = "d")]
    Decrypt {
        /// 16-byte key as 32 hex characters
        #[arg(long, required = true)]
        key: String,

        /// Ciphertext file
        input: PathBuf,

        /// Output file
        output: PathBuf,
    },

    /// Generate a random 16-byte key and print it as hex
    Keygen,
}

fn parse_key(hex_key: &str) -> Result<[u8; KEY_SIZE]> {
    let bytes = hex::decode(hex_key)
        .map_err(|e| RijnError::InvalidKey(format!("not valid hex: {}", e)))?;
    bytes.as_slice().try_into().map_err(|_| {
        RijnError::InvalidKey(format!("expected {} bytes, got {}", KEY_SIZE, bytes.len()))
    })
}

fn default_output_path(input: &PathBuf) -> PathBuf {
    let mut os = input.as_os_str().to_os_string();
    os.push(".aes");
    PathBuf::from(os)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("rijn {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt { key, input, output } => parse_key(&key).and_then(|key| {
            let output_path = output.unwrap_or_else(|| default_output_path(&input));
            encrypt_file(&input, &output_path, &key)?;
            println!("Encrypted to {}", output_path.display());
            Ok(())
        }),

        Commands::Decrypt { key, input, output } => parse_key(&key).and_then(|key| {
            decrypt_file(&input, &output, &key)?;
            println!("Decrypted to {}", output.display());
            Ok(())
        }),

        Commands::Keygen => {
            let mut key = [0u8; KEY_SIZE];
            rand::thread_rng().fill_bytes(&mut key);
            println!("{}", hex::encode(key));
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
