//! Shared input/output arguments.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use codebreaker::alphabet::strip_whitespace;

/// Where text comes from and where results go.
#[derive(Args, Debug, Clone)]
pub struct TextIo {
    /// Text to process directly (otherwise --input or stdin is used)
    #[arg(short, long, conflicts_with = "input")]
    pub text: Option<String>,

    /// Read text from this file
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl TextIo {
    /// Reads the raw input text.
    pub fn read_raw(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.input {
            return std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()));
        }
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    }

    /// Reads the input text with all whitespace removed.
    pub fn read_stripped(&self) -> Result<String> {
        Ok(strip_whitespace(&self.read_raw()?))
    }

    /// Writes `result` to the output file, or prints it.
    pub fn write(&self, result: &str) -> Result<()> {
        match &self.output {
            Some(path) => {
                std::fs::write(path, result)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                eprintln!("Result written to: {}", path.display());
            }
            None => println!("{}", result),
        }
        Ok(())
    }
}
