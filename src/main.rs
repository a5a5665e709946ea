//! Codebreaker - classical ciphers and how to break them
//!
//! A CLI for enciphering, deciphering and analysing substitution, Vigenère,
//! Bifid, Hill and Baconian ciphertext.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use codebreaker::Settings;

use commands::{
    AnalyzeCommand, BaconianCommand, BifidCommand, CommandExecutor, HillCommand,
    SubstitutionCommand, VigenereCommand,
};

/// Codebreaker - classical ciphers and how to break them
///
/// Text can be given with --text, read from --input, or piped on stdin.
/// Whitespace is removed before enciphering except for substitution, which
/// keeps spaces and punctuation.
#[derive(Parser)]
#[command(name = "codebreaker")]
#[command(version)]
#[command(about = "Classical ciphers and the statistics used to break them")]
#[command(long_about = None)]
struct Cli {
    /// Show debug output on stderr (RUST_LOG takes precedence when set)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (default: ~/.codebreaker/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Frequency analysis and index of coincidence
    Analyze(AnalyzeCommand),

    /// Vigenère cipher: encrypt, decrypt, crib and keyword derivation
    Vigenere(VigenereCommand),

    /// Simple substitution with a dummy placeholder for unknown letters
    Substitution(SubstitutionCommand),

    /// Bifid cipher over a 5x5 key square
    Bifid(BifidCommand),

    /// Hill cipher over an n x n key matrix
    Hill(HillCommand),

    /// Decode Baconian binary text
    Baconian(BaconianCommand),
}

impl Commands {
    fn executor(&self) -> &dyn CommandExecutor {
        match self {
            Commands::Analyze(cmd) => cmd,
            Commands::Vigenere(cmd) => cmd,
            Commands::Substitution(cmd) => cmd,
            Commands::Bifid(cmd) => cmd,
            Commands::Hill(cmd) => cmd,
            Commands::Baconian(cmd) => cmd,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "codebreaker=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    tracing::debug!(?settings, "settings ready");

    cli.command.executor().execute(&settings)
}
