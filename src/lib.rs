//! # Codebreaker - classical ciphers and how to break them
//!
//! Codebreaker is an educational toolkit for five pen-and-paper ciphers
//! (simple substitution, Vigenère, Bifid, Hill and Baconian) together with
//! the statistics used to break them.
//!
//! ## Overview
//!
//! - Letters map to ordinals `A=0 ... Z=25`, case-insensitively
//! - Ciphertext is produced in upper case, plaintext in lower case
//! - Every operation is a pure function of its arguments and returns a
//!   [`CipherError`] instead of a partial result
//! - Nothing in the library prints, prompts or touches files. Decision
//!   points are reported as `tracing` events
//!
//! ## Example Usage
//!
//! Recover a Vigenère keyword from ciphertext statistics:
//!
//! ```rust
//! use codebreaker::analysis::{ioc_table, most_frequent_letters};
//! use codebreaker::ciphers::vigenere::{derive_keyword_from_frequent_letters, Vigenere};
//! use codebreaker::ciphers::Cipher;
//!
//! let secret = Vigenere::new("KEY").unwrap();
//! let ciphertext = secret
//!     .encrypt("thereisnothingmoreeeeeeeeeeethaneeeeverywhere")
//!     .unwrap();
//!
//! // The IoC of every 3rd letter stands out
//! let table = ioc_table(&ciphertext, 6);
//! assert_eq!(table.len(), 6);
//!
//! let frequent = most_frequent_letters(&ciphertext, 3).unwrap();
//! let keyword = derive_keyword_from_frequent_letters(&frequent).unwrap();
//! assert_eq!(keyword, "KEY");
//!
//! let plaintext = Vigenere::new(&keyword).unwrap().decrypt(&ciphertext).unwrap();
//! assert!(plaintext.starts_with("thereis"));
//! ```
//!
//! Hill cipher round trip:
//!
//! ```rust
//! use codebreaker::ciphers::{hill_cipher, HillMode};
//!
//! assert_eq!(hill_cipher("ABCD", "HILL", HillMode::Encrypt).unwrap(), "ILMD");
//! assert_eq!(hill_cipher("ILMD", "HILL", HillMode::Decrypt).unwrap(), "ABCD");
//! ```
//!
//! ## Modules
//!
//! - [`alphabet`]: letter/ordinal mapping, GCD, modular inverse
//! - [`analysis`]: frequency tables, index of coincidence, subkey statistics
//! - [`ciphers`]: the five ciphers and the [`ciphers::Cipher`] trait
//! - [`config`]: defaults for the command-line tool
//! - [`error`]: the shared error type

pub mod alphabet;
pub mod analysis;
pub mod ciphers;
pub mod config;
pub mod error;

// Re-export commonly used types at the crate root
pub use ciphers::{Bifid, Cipher, Hill, HillMode, Substitution, Vigenere};
pub use config::{ConfigError, Settings};
pub use error::CipherError;
