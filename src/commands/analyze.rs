//! Analyze command - frequency tables and index of coincidence.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use clap::Args;

use codebreaker::analysis::{
    frequency_analysis, index_of_coincidence, ioc_table, most_frequent_letters, sorted_frequency,
    subkey_frequencies, ENGLISH_IOC, RANDOM_IOC,
};
use codebreaker::ciphers::vigenere::derive_keyword_from_frequent_letters;
use codebreaker::Settings;

use super::io::TextIo;
use super::CommandExecutor;

/// Print frequency and index-of-coincidence statistics for ciphertext.
///
/// Without --key-length this shows the overall frequency list, the IoC and
/// an IoC table for candidate key lengths. With --key-length it also shows
/// the frequency list of every subkey and the keyword those frequencies
/// suggest (assuming each subkey's most frequent letter is E).
#[derive(Args, Debug)]
pub struct AnalyzeCommand {
    #[command(flatten)]
    pub io: TextIo,

    /// Largest key length in the IoC table (default from settings)
    #[arg(short, long)]
    pub max_key_length: Option<usize>,

    /// Guessed key length: show per-subkey frequencies
    #[arg(short, long)]
    pub key_length: Option<usize>,
}

impl CommandExecutor for AnalyzeCommand {
    fn execute(&self, settings: &Settings) -> Result<()> {
        let text = self.io.read_stripped()?;
        let report = self.report(&text, settings)?;
        self.io.write(report.trim_end())
    }
}

impl AnalyzeCommand {
    fn report(&self, text: &str, settings: &Settings) -> Result<String> {
        let max_key_length = self.max_key_length.unwrap_or(settings.max_key_length);

        let mut report = String::new();
        writeln!(report, "Characters: {}", text.chars().count())?;
        writeln!(report)?;
        writeln!(report, "Frequency analysis:")?;
        write!(report, "{}", sorted_frequency(&frequency_analysis(text)))?;
        writeln!(report)?;

        let ioc = index_of_coincidence(text).context("Text too short for IoC")?;
        writeln!(
            report,
            "ioc = {:.5} (english ~ {:.4}, random ~ {:.4})",
            ioc, ENGLISH_IOC, RANDOM_IOC
        )?;
        writeln!(report)?;

        writeln!(report, "k\tioc")?;
        writeln!(report, "=\t===")?;
        for row in ioc_table(text, max_key_length) {
            writeln!(report, "{}\t{:.5}", row.key_length, row.ioc)?;
        }

        if let Some(key_length) = self.key_length {
            for (index, table) in subkey_frequencies(text, key_length)?.iter().enumerate() {
                writeln!(report)?;
                writeln!(report, "Frequency analysis for subkey {}", index + 1)?;
                write!(report, "{}", table)?;
            }
            let frequent = most_frequent_letters(text, key_length)
                .with_context(|| format!("Cannot derive a {}-letter keyword", key_length))?;
            let keyword = derive_keyword_from_frequent_letters(&frequent)?;
            writeln!(report)?;
            writeln!(report, "Most frequent letters: {}", frequent)?;
            writeln!(report, "Suggested keyword: {}", keyword)?;
        }

        Ok(report)
    }
}
