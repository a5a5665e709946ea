//! Bifid command.

use anyhow::{Context, Result};
use clap::Args;

use codebreaker::{Bifid, Settings};

use super::io::TextIo;
use super::{CommandExecutor, Direction};

/// Encrypt or decrypt with a 5x5 key square (no J) and a period.
#[derive(Args, Debug)]
pub struct BifidCommand {
    /// encrypt or decrypt
    #[arg(value_enum)]
    pub direction: Direction,

    /// 25-letter key square (default from settings)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Fractionation period (default from settings)
    #[arg(short, long)]
    pub period: Option<usize>,

    /// Print the key square to stderr before running
    #[arg(long)]
    pub show_square: bool,

    #[command(flatten)]
    pub io: TextIo,
}

impl CommandExecutor for BifidCommand {
    fn execute(&self, settings: &Settings) -> Result<()> {
        let key = self
            .key
            .as_deref()
            .or(settings.bifid.key_square.as_deref())
            .context("No key square given (use --key or set bifid.key_square)")?;
        let period = self.period.unwrap_or(settings.bifid.period);
        let cipher = Bifid::new(key, period)?;

        if self.show_square {
            eprintln!("{}", cipher.square());
        }

        let text = self.io.read_stripped()?;
        self.io.write(&self.direction.apply(&cipher, &text)?)
    }
}
