//! Vigenère cipher and keyword recovery.
//!
//! Key letters shift by `ordinal + 1`, so key letter `A` shifts by one and
//! `Z` by zero. Every function in this module uses that convention.

use crate::alphabet::{letter_to_ordinal, mod26, ordinal_to_letter, ordinal_to_lower};
use crate::ciphers::Cipher;
use crate::error::CipherError;

/// Subtracted from a subkey's most frequent ciphertext letter to get the key
/// letter, assuming that ciphertext letter stands for `E` (ordinal 4, plus 1).
pub const FREQUENT_LETTER_OFFSET: i64 = 5;

/// A Vigenère cipher with a validated keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    keyword: String,
    shifts: Vec<i64>,
}

impl Vigenere {
    /// Creates a cipher from a non-empty alphabetic keyword.
    pub fn new(keyword: &str) -> Result<Self, CipherError> {
        if keyword.is_empty() {
            return Err(CipherError::InvalidKey("keyword is empty".to_string()));
        }
        let shifts = keyword
            .chars()
            .map(|c| {
                letter_to_ordinal(c)
                    .map(|n| n as i64 + 1)
                    .map_err(|_| CipherError::InvalidKey(format!("'{}' is not a letter", c)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            keyword: keyword.to_ascii_uppercase(),
            shifts,
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    fn apply(&self, text: &str, direction: i64) -> Result<Vec<i64>, CipherError> {
        text.chars()
            .zip(self.shifts.iter().cycle())
            .map(|(c, &shift)| {
                let ordinal = letter_to_ordinal(c)? as i64;
                Ok(mod26(ordinal + direction * shift))
            })
            .collect()
    }
}

impl Cipher for Vigenere {
    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        self.apply(plaintext, 1)?
            .into_iter()
            .map(ordinal_to_letter)
            .collect()
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let ordinals = self.apply(ciphertext, -1)?;
        tracing::debug!(
            keyword = %self.keyword,
            len = ordinals.len(),
            "vigenere decrypt"
        );
        ordinals.into_iter().map(ordinal_to_lower).collect()
    }
}

/// Decrypts `ciphertext` with `keyword`.
pub fn decrypt(ciphertext: &str, keyword: &str) -> Result<String, CipherError> {
    Vigenere::new(keyword)?.decrypt(ciphertext)
}

/// Encrypts `plaintext` with `keyword`.
pub fn encrypt(plaintext: &str, keyword: &str) -> Result<String, CipherError> {
    Vigenere::new(keyword)?.encrypt(plaintext)
}

/// Derives a keyword assuming each subkey's most frequent ciphertext letter
/// decrypts to `E`.
///
/// The key length must already be known (or correctly guessed) for the
/// result to be meaningful.
pub fn derive_keyword_from_frequent_letters(frequent_letters: &str) -> Result<String, CipherError> {
    frequent_letters
        .chars()
        .map(|c| {
            let ordinal = letter_to_ordinal(c)? as i64;
            let key_char = ordinal_to_letter(mod26(ordinal - FREQUENT_LETTER_OFFSET))?;
            tracing::debug!(frequent = %c, key = %key_char, "subkey from frequent letter");
            Ok(key_char)
        })
        .collect()
}

/// Derives the keyword letters that turn `cipher_chars` into a guessed
/// plaintext `crib` placed at the same position.
pub fn derive_keyword_from_crib(cipher_chars: &str, crib: &str) -> Result<String, CipherError> {
    let (left, right) = (cipher_chars.chars().count(), crib.chars().count());
    if left != right {
        return Err(CipherError::LengthMismatch { left, right });
    }
    cipher_chars
        .chars()
        .zip(crib.chars())
        .map(|(c, p)| {
            let shift = letter_to_ordinal(c)? as i64 - letter_to_ordinal(p)? as i64 - 1;
            let key_char = ordinal_to_letter(mod26(shift))?;
            tracing::debug!(cipher = %c, crib = %p, key = %key_char, "subkey from crib");
            Ok(key_char)
        })
        .collect()
}
