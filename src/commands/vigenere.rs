//! Vigenère command - encrypt, decrypt and derive keywords.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use codebreaker::ciphers::vigenere::{
    derive_keyword_from_crib, derive_keyword_from_frequent_letters,
};
use codebreaker::{Settings, Vigenere};

use super::io::TextIo;
use super::{CommandExecutor, Direction};

/// Vigenère cipher operations.
#[derive(Args, Debug)]
pub struct VigenereCommand {
    #[command(subcommand)]
    pub action: VigenereAction,
}

#[derive(Subcommand, Debug)]
pub enum VigenereAction {
    /// Encrypt plaintext with a keyword
    Encrypt {
        /// Keyword (letters only)
        #[arg(short, long)]
        key: String,

        #[command(flatten)]
        io: TextIo,
    },

    /// Decrypt ciphertext with a keyword
    Decrypt {
        /// Keyword (letters only)
        #[arg(short, long)]
        key: String,

        #[command(flatten)]
        io: TextIo,
    },

    /// Derive keyword letters from a guessed plaintext fragment
    Crib {
        /// Guessed plaintext at --offset
        #[arg(short, long)]
        crib: String,

        /// Position of the crib in the ciphertext
        #[arg(long, default_value = "0")]
        offset: usize,

        #[command(flatten)]
        io: TextIo,
    },

    /// Derive a keyword from each subkey's most frequent ciphertext letter
    Derive {
        /// Most frequent letter of each subkey, in order (e.g. XJHWJY)
        letters: String,
    },
}

impl CommandExecutor for VigenereCommand {
    fn execute(&self, _settings: &Settings) -> Result<()> {
        match &self.action {
            VigenereAction::Encrypt { key, io } => run(Direction::Encrypt, key, io),
            VigenereAction::Decrypt { key, io } => run(Direction::Decrypt, key, io),
            VigenereAction::Crib { crib, offset, io } => {
                let ciphertext: Vec<char> = io.read_stripped()?.chars().collect();
                let crib_len = crib.chars().count();
                if offset + crib_len > ciphertext.len() {
                    bail!(
                        "Crib of {} letters at offset {} runs past the end of {} ciphertext letters",
                        crib_len,
                        offset,
                        ciphertext.len()
                    );
                }
                let window: String = ciphertext[*offset..offset + crib_len].iter().collect();
                let keyword = derive_keyword_from_crib(&window, crib)?;
                io.write(&keyword)
            }
            VigenereAction::Derive { letters } => {
                println!("{}", derive_keyword_from_frequent_letters(letters)?);
                Ok(())
            }
        }
    }
}

fn run(direction: Direction, key: &str, io: &TextIo) -> Result<()> {
    let cipher = Vigenere::new(key)?;
    let text = io.read_stripped()?;
    io.write(&direction.apply(&cipher, &text)?)
}
