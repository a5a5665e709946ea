//! Simple (monoalphabetic) substitution.
//!
//! The key is a 26-character string: position `i` holds the plaintext letter
//! for ciphertext letter `i`. A key may contain a dummy placeholder for
//! ciphertext letters whose plaintext is still unknown. When a decrypted
//! letter would be the dummy, the ciphertext letter is shown instead.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::alphabet::{letter_to_ordinal, ordinal_to_letter};
use crate::ciphers::Cipher;
use crate::error::CipherError;

/// Required key length.
pub const KEY_LEN: usize = 26;

/// A validated substitution key with an optional dummy character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    key: Vec<char>,
    dummy: Option<char>,
}

impl Substitution {
    /// Creates a substitution cipher. The key must have exactly 26 characters.
    pub fn new(key: &str, dummy: Option<char>) -> Result<Self, CipherError> {
        let key: Vec<char> = key.chars().collect();
        if key.len() != KEY_LEN {
            return Err(CipherError::InvalidKey(format!(
                "substitution key must have {} characters, got {}",
                KEY_LEN,
                key.len()
            )));
        }
        Ok(Self { key, dummy })
    }

    /// Builds a random permutation key using `rng`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut key: Vec<char> = ('A'..='Z').collect();
        key.shuffle(rng);
        Self { key, dummy: None }
    }

    /// The key as a string.
    pub fn key(&self) -> String {
        self.key.iter().collect()
    }

    fn is_dummy(&self, c: char) -> bool {
        self.dummy
            .map(|d| d.to_ascii_lowercase() == c.to_ascii_lowercase())
            .unwrap_or(false)
    }
}

impl Cipher for Substitution {
    /// Replaces each letter by the upper-case ciphertext letter whose key
    /// slot holds it. The first matching slot wins.
    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        plaintext
            .chars()
            .map(|c| {
                if !c.is_ascii_alphabetic() {
                    return Ok(c);
                }
                let position = self
                    .key
                    .iter()
                    .position(|k| k.eq_ignore_ascii_case(&c))
                    .ok_or_else(|| {
                        CipherError::InvalidInput(format!("'{}' does not appear in the key", c))
                    })?;
                ordinal_to_letter(position as i64)
            })
            .collect()
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let mut plaintext = String::with_capacity(ciphertext.len());
        for c in ciphertext.chars() {
            if !c.is_ascii_alphabetic() {
                plaintext.push(c);
                continue;
            }
            let mapped = self.key[letter_to_ordinal(c)? as usize];
            let out = if self.is_dummy(mapped) {
                c
            } else {
                mapped.to_ascii_lowercase()
            };
            tracing::trace!(cipher = %c, plain = %out, "substitution");
            plaintext.push(out);
        }
        Ok(plaintext)
    }
}

/// Decrypts `ciphertext` with `key`, leaving dummy positions as ciphertext.
pub fn decrypt(ciphertext: &str, key: &str, dummy: Option<char>) -> Result<String, CipherError> {
    Substitution::new(key, dummy)?.decrypt(ciphertext)
}

/// Encrypts `plaintext` with `key`.
pub fn encrypt(plaintext: &str, key: &str) -> Result<String, CipherError> {
    Substitution::new(key, None)?.encrypt(plaintext)
}
