//! Substitution command - simple substitution with a dummy placeholder.

use anyhow::{bail, Result};
use clap::Args;

use codebreaker::{Settings, Substitution};

use super::io::TextIo;
use super::{CommandExecutor, Direction};

/// Encrypt or decrypt with a 26-character substitution key.
///
/// Spaces and punctuation are kept, so partially solved ciphertext stays
/// readable. Key slots holding the dummy character leave the ciphertext
/// letter in place when decrypting.
#[derive(Args, Debug)]
pub struct SubstitutionCommand {
    /// encrypt or decrypt (omit with --random)
    #[arg(value_enum, required_unless_present = "random")]
    pub direction: Option<Direction>,

    /// 26-character key; position i is the plaintext for ciphertext letter i
    #[arg(short, long, required_unless_present = "random")]
    pub key: Option<String>,

    /// Placeholder for unknown key slots (default from settings)
    #[arg(short, long)]
    pub dummy: Option<char>,

    /// Print a random permutation key and exit
    #[arg(long, conflicts_with_all = ["key", "direction"])]
    pub random: bool,

    #[command(flatten)]
    pub io: TextIo,
}

impl CommandExecutor for SubstitutionCommand {
    fn execute(&self, settings: &Settings) -> Result<()> {
        if self.random {
            let cipher = Substitution::random(&mut rand::thread_rng());
            println!("{}", cipher.key());
            return Ok(());
        }

        let (Some(direction), Some(key)) = (self.direction, self.key.as_deref()) else {
            bail!("A direction and --key are required");
        };
        let dummy = self.dummy.or(settings.substitution.dummy);
        let cipher = Substitution::new(key, dummy)?;

        let text = self.io.read_raw()?;
        let result = direction.apply(&cipher, text.trim_end())?;
        self.io.write(&result)
    }
}
