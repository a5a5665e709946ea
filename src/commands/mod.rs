//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.
//! Commands own all I/O: they read text, strip it, call into the library and
//! write the result.

mod analyze;
mod baconian;
mod bifid;
mod hill;
mod io;
mod substitution;
mod vigenere;

pub use analyze::AnalyzeCommand;
pub use baconian::BaconianCommand;
pub use bifid::BifidCommand;
pub use hill::HillCommand;
pub use substitution::SubstitutionCommand;
pub use vigenere::VigenereCommand;

use anyhow::Result;
use clap::ValueEnum;

use codebreaker::{Cipher, CipherError, Settings};

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments and the loaded settings.
    fn execute(&self, settings: &Settings) -> Result<()>;
}

/// Which way to run a cipher.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    /// Runs `cipher` in this direction over `text`.
    pub fn apply(self, cipher: &dyn Cipher, text: &str) -> Result<String, CipherError> {
        match self {
            Direction::Encrypt => cipher.encrypt(text),
            Direction::Decrypt => cipher.decrypt(text),
        }
    }
}
