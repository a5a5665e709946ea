//! 26-letter alphabet arithmetic.
//!
//! Letters map to ordinals `A=0 ... Z=25` regardless of case. Ciphertext is
//! written in upper case and plaintext in lower case throughout the crate,
//! so both directions of the mapping are provided.

use crate::error::CipherError;

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: i64 = 26;

/// Returns the ordinal of `letter` (`'A'`/`'a'` = 0, `'Z'`/`'z'` = 25).
pub fn letter_to_ordinal(letter: char) -> Result<u8, CipherError> {
    if !letter.is_ascii_alphabetic() {
        return Err(CipherError::InvalidInput(format!(
            "'{}' is not a letter",
            letter
        )));
    }
    Ok(letter.to_ascii_uppercase() as u8 - b'A')
}

/// Returns the upper-case letter for `ordinal`.
pub fn ordinal_to_letter(ordinal: i64) -> Result<char, CipherError> {
    if !(0..ALPHABET_LEN).contains(&ordinal) {
        return Err(CipherError::OutOfRange(ordinal));
    }
    Ok((b'A' + ordinal as u8) as char)
}

/// Returns the lower-case (plaintext) letter for `ordinal`.
pub fn ordinal_to_lower(ordinal: i64) -> Result<char, CipherError> {
    ordinal_to_letter(ordinal).map(|c| c.to_ascii_lowercase())
}

/// Reduces `value` into `0..26`.
pub fn mod26(value: i64) -> i64 {
    value.rem_euclid(ALPHABET_LEN)
}

/// Greatest common divisor by Euclid's algorithm.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while a != 0 {
        let r = b % a;
        b = a;
        a = r;
    }
    b
}

/// Returns `x` such that `(a * x) mod m == 1`, or `None` when `a` and `m`
/// are not coprime.
///
/// Uses the extended Euclidean algorithm. The result is always in `0..m`.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    if m <= 0 {
        return None;
    }
    let a = a.rem_euclid(m);
    if gcd(a, m) != 1 {
        return None;
    }

    let (mut u1, mut u2, mut u3) = (1i64, 0i64, a);
    let (mut v1, mut v2, mut v3) = (0i64, 1i64, m);
    while v3 != 0 {
        let q = u3 / v3;
        let next = (u1 - q * v1, u2 - q * v2, u3 - q * v3);
        u1 = v1;
        u2 = v2;
        u3 = v3;
        v1 = next.0;
        v2 = next.1;
        v3 = next.2;
    }
    Some(u1.rem_euclid(m))
}

/// Converts every character of `text` to its ordinal, failing on the first
/// non-letter.
pub fn ordinals(text: &str) -> Result<Vec<u8>, CipherError> {
    text.chars().map(letter_to_ordinal).collect()
}

/// Removes all whitespace from `text`.
///
/// The cipher functions never strip input themselves; callers reading text
/// files do this before passing text in.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
