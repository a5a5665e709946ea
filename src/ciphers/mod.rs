//! The five classical ciphers.
//!
//! Each keyed cipher validates its key once at construction and then
//! implements [`Cipher`]. The module-level free functions are shorthands
//! that build the cipher and run a single operation.

pub mod baconian;
pub mod bifid;
pub mod hill;
pub mod substitution;
pub mod vigenere;

pub use baconian::{binary_block_to_letter, decode_baconian, split_rows};
pub use bifid::{Bifid, Coord, KeySquare};
pub use hill::{hill_cipher, Hill, HillMode, Matrix};
pub use substitution::Substitution;
pub use vigenere::Vigenere;

use crate::error::CipherError;

/// A keyed cipher with both directions.
///
/// By convention `encrypt` produces upper-case ciphertext and `decrypt`
/// produces lower-case plaintext. Hill is the exception and emits upper case
/// both ways.
pub trait Cipher {
    /// Enciphers `plaintext`.
    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError>;

    /// Deciphers `ciphertext`.
    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError>;
}
