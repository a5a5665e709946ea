//! Index of coincidence and stride sub-sequences.

use crate::alphabet::letter_to_ordinal;
use crate::error::CipherError;

/// Expected IoC of English plaintext.
pub const ENGLISH_IOC: f64 = 0.0667;

/// IoC of uniformly random letters (1/26).
pub const RANDOM_IOC: f64 = 1.0 / 26.0;

/// IoC of the stride sequence for one candidate key length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IocRow {
    pub key_length: usize,
    pub ioc: f64,
}

/// Σ F(F−1) / (n(n−1)) over the 26 letters, where `n` counts every
/// character of `text`.
///
/// Letters are counted case-insensitively. Non-letters contribute to `n`
/// but not to any letter count.
pub fn index_of_coincidence(text: &str) -> Result<f64, CipherError> {
    let n = text.chars().count();
    if n < 2 {
        return Err(CipherError::InsufficientData { needed: 2, got: n });
    }

    let mut counts = [0u64; 26];
    for c in text.chars() {
        if let Ok(ordinal) = letter_to_ordinal(c) {
            counts[ordinal as usize] += 1;
        }
    }

    let n = n as f64;
    let coincidences: u64 = counts.iter().map(|&f| f * f.saturating_sub(1)).sum();
    let ioc = coincidences as f64 / (n * (n - 1.0));
    tracing::trace!(n, ioc, "index of coincidence");
    Ok(ioc)
}

/// Every `k`-th character of `text`, starting at index 0.
pub fn subsequence_by_stride(text: &str, k: usize) -> Result<String, CipherError> {
    if k == 0 {
        return Err(CipherError::InvalidInput(
            "stride must be at least 1".to_string(),
        ));
    }
    Ok(text.chars().step_by(k).collect())
}

/// The ciphertext enciphered by subkey `index` of a `key_length`-letter key.
pub fn subkey_sequence(
    text: &str,
    key_length: usize,
    index: usize,
) -> Result<String, CipherError> {
    if key_length == 0 {
        return Err(CipherError::InvalidInput(
            "key length must be at least 1".to_string(),
        ));
    }
    if index >= key_length {
        return Err(CipherError::InvalidInput(format!(
            "subkey index {} is outside a key of length {}",
            index, key_length
        )));
    }
    Ok(text.chars().skip(index).step_by(key_length).collect())
}

/// IoC of the stride-`k` sequence for every `k` in `1..=max_key_length`.
///
/// A peak near [`ENGLISH_IOC`] suggests `k` (or a multiple of the true key
/// length). Rows whose sequence has fewer than two characters are omitted.
pub fn ioc_table(text: &str, max_key_length: usize) -> Vec<IocRow> {
    (1..=max_key_length)
        .filter_map(|k| {
            let sub: String = text.chars().step_by(k).collect();
            match index_of_coincidence(&sub) {
                Ok(ioc) => Some(IocRow { key_length: k, ioc }),
                Err(_) => None,
            }
        })
        .inspect(|row| tracing::debug!(k = row.key_length, ioc = row.ioc, "ioc table row"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ioc_identical_letters() {
        let ioc = index_of_coincidence("EEEEEEEEEE").unwrap();
        assert!((ioc - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ioc_all_distinct() {
        let ioc = index_of_coincidence("ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
        assert_eq!(ioc, 0.0);
    }

    #[test]
    fn test_ioc_cycling_alphabet_tends_to_random() {
        let text: String = "ABCDEFGHIJKLMNOPQRSTUVWXYZ".repeat(400);
        let ioc = index_of_coincidence(&text).unwrap();
        assert!((ioc - RANDOM_IOC).abs() < 0.001, "ioc = {}", ioc);
    }

    #[test]
    fn test_ioc_case_insensitive() {
        let upper = index_of_coincidence("AABBC").unwrap();
        let mixed = index_of_coincidence("aAbBc").unwrap();
        assert_eq!(upper, mixed);
        // (2 + 2) / (5 * 4)
        assert!((upper - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_ioc_insufficient_data() {
        assert_eq!(
            index_of_coincidence("A"),
            Err(CipherError::InsufficientData { needed: 2, got: 1 })
        );
        assert!(index_of_coincidence("").is_err());
    }

    #[test]
    fn test_subsequence_by_stride() {
        assert_eq!(subsequence_by_stride("XSFJDJMNRF", 3).unwrap(), "XJMF");
        assert_eq!(subsequence_by_stride("XSFJ", 1).unwrap(), "XSFJ");
        assert_eq!(subsequence_by_stride("XSFJ", 10).unwrap(), "X");
        assert_eq!(subsequence_by_stride("", 2).unwrap(), "");
        assert!(matches!(
            subsequence_by_stride("XSFJ", 0),
            Err(CipherError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_subkey_sequence() {
        assert_eq!(subkey_sequence("XSFJDJMNRF", 3, 1).unwrap(), "SDN");
        assert_eq!(subkey_sequence("XSFJDJMNRF", 3, 2).unwrap(), "FJR");
        assert!(subkey_sequence("XSFJ", 3, 3).is_err());
        assert!(subkey_sequence("XSFJ", 0, 0).is_err());
    }

    #[test]
    fn test_ioc_table_skips_short_rows() {
        let table = ioc_table("AAAA", 5);
        let lengths: Vec<usize> = table.iter().map(|r| r.key_length).collect();
        // k=1 -> AAAA, k=2 -> AA, k>=3 -> single 'A'
        assert_eq!(lengths, vec![1, 2]);
        assert!(table.iter().all(|r| (r.ioc - 1.0).abs() < 1e-12));
    }
}
