//! Baconian command - decode binary column text.

use anyhow::Result;
use clap::Args;

use codebreaker::ciphers::{decode_baconian, split_rows};
use codebreaker::Settings;

use super::io::TextIo;
use super::CommandExecutor;

/// Decode Baconian binary text laid out as groups of five rows.
///
/// The input is split into rows on --delimiter after whitespace is removed.
#[derive(Args, Debug)]
pub struct BaconianCommand {
    /// Character separating rows in the input (default from settings)
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Text placed between decoded groups (default from settings)
    #[arg(short, long)]
    pub separator: Option<String>,

    #[command(flatten)]
    pub io: TextIo,
}

impl CommandExecutor for BaconianCommand {
    fn execute(&self, settings: &Settings) -> Result<()> {
        let delimiter = self.delimiter.unwrap_or(settings.baconian.delimiter);
        let separator = self
            .separator
            .as_deref()
            .unwrap_or(&settings.baconian.separator);

        let rows = split_rows(&self.io.read_raw()?, delimiter);
        tracing::debug!(rows = rows.len(), "split binary text");
        self.io.write(&decode_baconian(&rows, separator)?)
    }
}
