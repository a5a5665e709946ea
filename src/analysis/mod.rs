//! Statistical cryptanalysis over ciphertext.
//!
//! This module provides:
//! - Character frequency tables and count-sorted frequency lists
//! - Index of coincidence
//! - Stride sub-sequences for isolating one Vigenère subkey
//! - Per-key-length IoC tables and per-subkey frequency lists
//!
//! Nothing here picks a key length. The tables are meant to be read by a
//! person (or a higher-level search) who then feeds a guess back into
//! [`crate::ciphers::vigenere`].

pub mod coincidence;
pub mod frequency;

pub use coincidence::{
    index_of_coincidence, ioc_table, subkey_sequence, subsequence_by_stride, IocRow, ENGLISH_IOC,
    RANDOM_IOC,
};
pub use frequency::{
    frequency_analysis, most_frequent_letters, sorted_frequency, subkey_frequencies,
    FrequencyGroup, FrequencyTable, SortedFrequency,
};
