//! Frequency counting.

use std::collections::BTreeMap;
use std::fmt;

use crate::analysis::coincidence::subkey_sequence;
use crate::error::CipherError;

/// Occurrence counts per character.
///
/// Alphabetic characters are folded to upper case so `'e'` and `'E'` count
/// together. Any other character is counted as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, usize>,
}

impl FrequencyTable {
    /// Count for `c` (case-insensitive for letters).
    pub fn count(&self, c: char) -> usize {
        self.counts
            .get(&c.to_ascii_uppercase())
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all counts. Equals the number of characters analysed.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct characters seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(char, count)` in ascending character order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }
}

/// Letters sharing one count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyGroup {
    pub count: usize,
    /// Letters with this count, in ascending order.
    pub letters: Vec<char>,
}

/// Frequency groups sorted by count, highest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedFrequency {
    pub groups: Vec<FrequencyGroup>,
}

impl SortedFrequency {
    /// Sum of `count * letters` across all groups.
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.count * g.letters.len()).sum()
    }

    /// First letter of the highest-count group.
    pub fn most_frequent(&self) -> Option<char> {
        self.groups.first().and_then(|g| g.letters.first().copied())
    }
}

impl fmt::Display for SortedFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            let letters: Vec<String> = group.letters.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{} : {}", group.count, letters.join(" "))?;
        }
        Ok(())
    }
}

/// Counts the characters of `text`.
pub fn frequency_analysis(text: &str) -> FrequencyTable {
    let mut counts = BTreeMap::new();
    for c in text.chars() {
        *counts.entry(c.to_ascii_uppercase()).or_insert(0) += 1;
    }
    FrequencyTable { counts }
}

/// Groups a table by count, highest first.
pub fn sorted_frequency(table: &FrequencyTable) -> SortedFrequency {
    let mut by_count: BTreeMap<usize, Vec<char>> = BTreeMap::new();
    for (c, n) in table.iter() {
        by_count.entry(n).or_default().push(c);
    }
    let groups = by_count
        .into_iter()
        .rev()
        .map(|(count, letters)| FrequencyGroup { count, letters })
        .collect();
    SortedFrequency { groups }
}

/// Sorted frequencies of each subkey's ciphertext for a guessed key length.
pub fn subkey_frequencies(
    text: &str,
    key_length: usize,
) -> Result<Vec<SortedFrequency>, CipherError> {
    if key_length == 0 {
        return Err(CipherError::InvalidInput(
            "key length must be at least 1".to_string(),
        ));
    }
    (0..key_length)
        .map(|index| {
            let sub = subkey_sequence(text, key_length, index)?;
            Ok(sorted_frequency(&frequency_analysis(&sub)))
        })
        .collect()
}

/// Most frequent ciphertext letter of each subkey, concatenated.
///
/// Ties resolve to the alphabetically first letter. The result is suitable
/// for [`crate::ciphers::vigenere::derive_keyword_from_frequent_letters`].
///
/// Fails with `InsufficientData` when `text` is shorter than `key_length`,
/// since some subkey would then have no ciphertext at all.
pub fn most_frequent_letters(text: &str, key_length: usize) -> Result<String, CipherError> {
    let tables = subkey_frequencies(text, key_length)?;
    let letters = tables
        .iter()
        .map(|t| t.most_frequent())
        .collect::<Option<String>>()
        .ok_or_else(|| CipherError::InsufficientData {
            needed: key_length,
            got: text.chars().count(),
        })?;
    tracing::debug!(key_length, letters = %letters, "most frequent letter per subkey");
    Ok(letters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_total_matches_length() {
        let text = "XSFJDJMNRFRUDJVLMYFT";
        let table = frequency_analysis(text);
        assert_eq!(table.total(), text.len());
        assert_eq!(table.count('J'), 3);
        assert_eq!(table.count('F'), 3);
        assert_eq!(table.count('Q'), 0);
    }

    #[test]
    fn test_frequency_case_folding() {
        let table = frequency_analysis("aAbB .");
        assert_eq!(table.count('a'), 2);
        assert_eq!(table.count('B'), 2);
        assert_eq!(table.count(' '), 1);
        assert_eq!(table.count('.'), 1);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_frequency_empty() {
        let table = frequency_analysis("");
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert!(sorted_frequency(&table).groups.is_empty());
    }

    #[test]
    fn test_sorted_frequency_groups_ties() {
        let table = frequency_analysis("XHXHJJJYMN");
        let sorted = sorted_frequency(&table);

        assert_eq!(sorted.groups[0].count, 3);
        assert_eq!(sorted.groups[0].letters, vec!['J']);
        assert_eq!(sorted.groups[1].count, 2);
        assert_eq!(sorted.groups[1].letters, vec!['H', 'X']);
        assert_eq!(sorted.groups[2].count, 1);
        assert_eq!(sorted.groups[2].letters, vec!['M', 'N', 'Y']);
        assert_eq!(sorted.total(), table.total());
        assert_eq!(sorted.most_frequent(), Some('J'));
    }

    #[test]
    fn test_sorted_frequency_display() {
        let sorted = sorted_frequency(&frequency_analysis("AAB"));
        assert_eq!(sorted.to_string(), "2 : A\n1 : B\n");
    }

    #[test]
    fn test_subkey_frequencies() {
        // Subkey 0 sees A A A, subkey 1 sees B C B.
        let tables = subkey_frequencies("ABACAB", 2).unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].most_frequent(), Some('A'));
        assert_eq!(tables[1].groups[0].count, 2);
        assert_eq!(tables[1].most_frequent(), Some('B'));
    }

    #[test]
    fn test_most_frequent_letters() {
        assert_eq!(most_frequent_letters("ABACAB", 2).unwrap(), "AB");
        assert!(matches!(
            most_frequent_letters("ABACAB", 0),
            Err(CipherError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_most_frequent_letters_text_shorter_than_key() {
        assert_eq!(
            most_frequent_letters("XJ", 6),
            Err(CipherError::InsufficientData { needed: 6, got: 2 })
        );
        // Exactly one letter per subkey is enough
        assert_eq!(most_frequent_letters("XJHWJY", 6).unwrap(), "XJHWJY");
    }
}
