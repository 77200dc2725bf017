use std::error::Error;
use std::io::Read;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use vigenere_analysis::config::{DEFAULT_MAX_KEY_LENGTH, DEFAULT_TOLERANCE};
use vigenere_analysis::{alphabet, attack, kasiski, recover_with_length, AttackConfig, Language};

/// Recovers the key of a Vigenère ciphertext using Kasiski examination
/// and per-column frequency analysis.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the input file containing encrypted text (stdin if omitted)
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: Option<String>,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: Option<String>,

    /// Language of the plaintext
    #[arg(short, long, default_value = "en", value_parser = Language::from_tag, help = "Plaintext language (en/pt/de)")]
    language: Language,

    /// Largest key length the Kasiski examination considers
    #[arg(long, default_value_t = DEFAULT_MAX_KEY_LENGTH)]
    max_key_length: usize,

    /// Bias towards longer key lengths in the Kasiski vote
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: usize,

    /// Skip the Kasiski examination and assume this key length
    #[arg(long)]
    key_length: Option<usize>,

    /// Print the decrypted text to stdout when no output file is given
    #[arg(short, long)]
    decrypt: bool,

    /// Print the repeat spacings and per-divisor counts of the Kasiski examination
    #[arg(short, long)]
    verbose: bool,
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

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli: Cli = Cli::parse();
    let input: String = read_input(cli.file.as_deref())?;

    let clean = alphabet::clean_text(&input);
    if clean.len() < 50 {
        warn!(letters = clean.len(), "text may be too short for reliable analysis");
    }

    let config = AttackConfig::new(cli.max_key_length, cli.tolerance);
    if cli.verbose {
        print!("{}", kasiski::examine(&clean, &config.kasiski));
    }

    let report = match cli.key_length {
        Some(key_length) => recover_with_length(&input, cli.language, key_length)?,
        None => attack(&input, cli.language, &config)?,
    };

    println!("Estimated key length: {}", report.key_length);
    println!("Most probable key: {}", report.key);

    let decrypted_text = report.decrypt(&input);
    match cli.output {
        Some(path) => std::fs::write(&path, &decrypted_text)?,
        None if cli.decrypt => {
            println!();
            print!("{}", decrypted_text);
        }
        None => {}
    }

    Ok(())
}
