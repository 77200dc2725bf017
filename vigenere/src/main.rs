use std::error::Error;
use std::io::Read;

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vigenere_analysis::{Key, Vigenere};

/// Command-line arguments for the Vigenère cipher program.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt (stdin if omitted)
    #[arg(short, long, help = "Path to the input file")]
    file: Option<String>,

    /// Key string for the Vigenère cipher
    #[arg(short, long, help = "Key string for the cipher (letters only)")]
    key: String,

    /// Path to the output file where result will be saved (stdout if omitted)
    #[arg(short, long, help = "Path to the output file")]
    output: Option<String>,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

fn read_input(path: Option<&str>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}

/// Main entry point for the Vigenère cipher program.
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli: Cli = Cli::parse();

    // Reject bad keys before touching any input
    let cipher = Vigenere::new(Key::new(&cli.key)?);
    let content: String = read_input(cli.file.as_deref())?;
    debug!(bytes = content.len(), mode = ?cli.mode, key = %cipher.key(), "input loaded");

    let result = match cli.mode {
        OperationMode::Encrypt => cipher.encrypt(&content),
        OperationMode::Decrypt => cipher.decrypt(&content),
    };

    match cli.output {
        Some(path) => {
            std::fs::write(&path, result)?;
            eprintln!("Operation completed successfully! Output saved to: {}", path);
        }
        None => print!("{}", result),
    }

    Ok(())
}
