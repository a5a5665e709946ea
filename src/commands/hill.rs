//! Hill command.

use anyhow::Result;
use clap::Args;

use codebreaker::{Hill, Settings};

use super::io::TextIo;
use super::{CommandExecutor, Direction};

/// Encrypt or decrypt with a Hill key of n*n letters (4 for 2x2, 9 for 3x3, ...).
#[derive(Args, Debug)]
pub struct HillCommand {
    /// encrypt or decrypt
    #[arg(value_enum)]
    pub direction: Direction,

    /// Key letters, filling the matrix row by row
    #[arg(short, long)]
    pub key: String,

    /// Print the key matrix and its inverse to stderr
    #[arg(long)]
    pub show_matrix: bool,

    #[command(flatten)]
    pub io: TextIo,
}

impl CommandExecutor for HillCommand {
    fn execute(&self, _settings: &Settings) -> Result<()> {
        let cipher = Hill::new(&self.key)?;

        if self.show_matrix {
            eprintln!("Key matrix:\n{}", cipher.key_matrix());
            match cipher.inverse_matrix() {
                Some(inverse) => eprintln!("Inverse mod 26:\n{}", inverse),
                None => eprintln!("Key matrix is not invertible mod 26"),
            }
        }

        let text = self.io.read_stripped()?;
        self.io.write(&self.direction.apply(&cipher, &text)?)
    }
}
