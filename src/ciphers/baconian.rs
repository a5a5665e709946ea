//! Baconian decoder for binary text laid out in columns.
//!
//! The binary text comes as rows of `0`/`1`, five rows to a group. Reading
//! one column of a group top to bottom yields a 5-bit letter code. Row 0 is
//! the least significant bit, so the bits are assembled bottom row first.
//! Codes of 26 or more are reduced modulo 26.

use crate::alphabet::{mod26, ordinal_to_letter, strip_whitespace};
use crate::error::CipherError;

/// Rows per letter group.
pub const ROWS_PER_GROUP: usize = 5;

const MAX_BITS: usize = 32;

/// Interprets `bits` as a binary number (most significant bit first) and
/// maps it modulo 26 onto `'A'..='Z'`.
pub fn binary_block_to_letter(bits: &str) -> Result<char, CipherError> {
    if bits.is_empty() {
        return Err(CipherError::InvalidInput("empty binary block".to_string()));
    }
    if bits.len() > MAX_BITS {
        return Err(CipherError::InvalidInput(format!(
            "binary block has more than {} bits",
            MAX_BITS
        )));
    }

    let mut value: i64 = 0;
    for c in bits.chars() {
        let bit = match c {
            '0' => 0,
            '1' => 1,
            other => {
                return Err(CipherError::InvalidInput(format!(
                    "'{}' is not a binary digit",
                    other
                )))
            }
        };
        value = (value << 1) | bit;
    }

    let reduced = mod26(value);
    let letter = ordinal_to_letter(reduced)?;
    tracing::trace!(bits, value, reduced, letter = %letter, modded = value != reduced, "baconian block");
    Ok(letter)
}

/// Decodes groups of five binary rows into letters, column by column.
///
/// `separator` is placed between the letters of successive groups.
pub fn decode_baconian<S: AsRef<str>>(rows: &[S], separator: &str) -> Result<String, CipherError> {
    if rows.len() % ROWS_PER_GROUP != 0 {
        return Err(CipherError::InvalidInput(format!(
            "{} rows is not a multiple of {}",
            rows.len(),
            ROWS_PER_GROUP
        )));
    }

    let mut words = Vec::with_capacity(rows.len() / ROWS_PER_GROUP);
    for group in rows.chunks(ROWS_PER_GROUP) {
        let group: Vec<Vec<char>> = group.iter().map(|r| r.as_ref().chars().collect()).collect();
        let width = group[0].len();
        if let Some(row) = group.iter().find(|r| r.len() != width) {
            return Err(CipherError::LengthMismatch {
                left: width,
                right: row.len(),
            });
        }

        let mut word = String::with_capacity(width);
        for column in 0..width {
            let bits: String = group.iter().rev().map(|row| row[column]).collect();
            word.push(binary_block_to_letter(&bits)?);
        }
        words.push(word);
    }
    Ok(words.join(separator))
}

/// Strips whitespace from raw binary text and splits it into rows on
/// `delimiter`. Empty rows are dropped.
pub fn split_rows(text: &str, delimiter: char) -> Vec<String> {
    strip_whitespace(text)
        .split(delimiter)
        .filter(|row| !row.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_block_to_letter() {
        assert_eq!(binary_block_to_letter("00000").unwrap(), 'A');
        assert_eq!(binary_block_to_letter("00001").unwrap(), 'B');
        assert_eq!(binary_block_to_letter("11001").unwrap(), 'Z');
    }

    #[test]
    fn test_binary_block_reduces_mod_26() {
        // 59 = 2 * 26 + 7
        assert_eq!(binary_block_to_letter("00111011").unwrap(), 'H');
        // 26 -> A
        assert_eq!(binary_block_to_letter("11010").unwrap(), 'A');
    }

    #[test]
    fn test_binary_block_rejects_non_binary() {
        assert!(matches!(
            binary_block_to_letter("01201"),
            Err(CipherError::InvalidInput(_))
        ));
        assert!(binary_block_to_letter("").is_err());
        assert!(binary_block_to_letter(&"1".repeat(33)).is_err());
    }

    #[test]
    fn test_decode_reference() {
        assert_eq!(decode_baconian(&["10", "00", "00", "01", "00"], "").unwrap(), "BI");
    }

    #[test]
    fn test_decode_separator_between_groups() {
        let rows = ["10", "00", "00", "01", "00", "1", "0", "0", "0", "0"];
        assert_eq!(decode_baconian(&rows, " ").unwrap(), "BI B");
    }

    #[test]
    fn test_decode_row_count() {
        assert!(matches!(
            decode_baconian(&["10", "00", "00", "01"], ""),
            Err(CipherError::InvalidInput(_))
        ));
        assert_eq!(decode_baconian::<&str>(&[], " ").unwrap(), "");
    }

    #[test]
    fn test_decode_ragged_group() {
        assert_eq!(
            decode_baconian(&["10", "00", "000", "01", "00"], ""),
            Err(CipherError::LengthMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn test_split_rows() {
        let rows = split_rows("10 2\n00 2 00\n2 01 2 00 2", '2');
        assert_eq!(rows, vec!["10", "00", "00", "01", "00"]);
        assert_eq!(decode_baconian(&rows, "").unwrap(), "BI");
    }
}
