//! Integration tests for Codebreaker
//!
//! The Vigenère fixture is a 1214-letter ciphertext under the keyword SECRET.
//! It is long enough for the IoC table and subkey frequencies to point at the
//! key without help.

use codebreaker::alphabet::strip_whitespace;
use codebreaker::analysis::{
    index_of_coincidence, ioc_table, most_frequent_letters, subkey_frequencies, ENGLISH_IOC,
    RANDOM_IOC,
};
use codebreaker::ciphers::vigenere::{
    derive_keyword_from_crib, derive_keyword_from_frequent_letters,
};
use codebreaker::ciphers::{decode_baconian, hill_cipher, split_rows, substitution};
use codebreaker::{Bifid, Cipher, CipherError, Hill, HillMode, Settings, Substitution, Vigenere};

const WIKIPEDIA_SQUARE: &str = "PHQGMEAYLNOFDXKRCVSZWTUBI";

fn ciphertext() -> String {
    strip_whitespace(include_str!("fixtures/vigenere_ciphertext.txt"))
}

fn plaintext() -> String {
    strip_whitespace(include_str!("fixtures/vigenere_plaintext.txt"))
}

/// Lays out `letters` as five binary rows, one column per letter, row 0 holding
/// the least significant bit.
fn baconian_rows(letters: &str) -> Vec<String> {
    (0..5)
        .map(|row| {
            letters
                .bytes()
                .map(|b| if ((b - b'A') >> row) & 1 == 1 { '1' } else { '0' })
                .collect()
        })
        .collect()
}

/// The key length with the highest IoC is the keyword length
#[test]
fn test_ioc_table_peaks_at_key_length() {
    let table = ioc_table(&ciphertext(), 9);
    assert_eq!(table.len(), 9);

    let best = table
        .iter()
        .max_by(|a, b| a.ioc.partial_cmp(&b.ioc).unwrap())
        .unwrap();
    assert_eq!(best.key_length, 6);
    assert!(best.ioc > 0.06, "ioc {} should look like English", best.ioc);

    // The whole ciphertext looks closer to random than to English
    let overall = index_of_coincidence(&ciphertext()).unwrap();
    assert!((overall - RANDOM_IOC).abs() < (overall - ENGLISH_IOC).abs());
}

/// Frequent letters give most of the keyword; the runner-up fixes the rest
#[test]
fn test_frequency_attack_recovers_keyword() {
    let ct = ciphertext();

    let frequent = most_frequent_letters(&ct, 6).unwrap();
    assert_eq!(frequent, "XJHJYY");
    assert_eq!(derive_keyword_from_frequent_letters(&frequent).unwrap(), "SECETT");

    // Subkeys 4 and 5 have a close second: W and J
    let tables = subkey_frequencies(&ct, 6).unwrap();
    assert!(tables[3].groups.iter().any(|g| g.letters.contains(&'W')));
    assert_eq!(tables[4].groups[1].letters, vec!['J']);

    assert_eq!(derive_keyword_from_frequent_letters("XJHWJY").unwrap(), "SECRET");
}

/// Decrypting the fixture with the recovered keyword gives the known plaintext
#[test]
fn test_decrypt_fixture() {
    let vigenere = Vigenere::new("SECRET").unwrap();
    let decrypted = vigenere.decrypt(&ciphertext()).unwrap();

    assert_eq!(decrypted, plaintext());
    assert!(decrypted.starts_with("encryptionmakesthemodernworldgoround"));

    // And back again
    assert_eq!(vigenere.encrypt(&decrypted).unwrap(), ciphertext());
}

/// A crib anywhere in the text gives the keyword in rotated order
#[test]
fn test_crib_attack() {
    let ct = ciphertext();
    let pt = plaintext();

    assert_eq!(derive_keyword_from_crib(&ct[..6], &pt[..6]).unwrap(), "SECRET");
    assert_eq!(derive_keyword_from_crib(&ct[8..14], &pt[8..14]).unwrap(), "CRETSE");
}

/// Every keyed cipher round-trips through the trait object
#[test]
fn test_all_ciphers_roundtrip() {
    let text = "attackatdawnonthewesternfront";
    let ciphers: Vec<(&str, Box<dyn Cipher>)> = vec![
        ("vigenere", Box::new(Vigenere::new("LEMON").unwrap())),
        (
            "substitution",
            Box::new(Substitution::new("QWERTYUIOPASDFGHJKLZXCVBNM", None).unwrap()),
        ),
        ("bifid", Box::new(Bifid::new(WIKIPEDIA_SQUARE, 7).unwrap())),
    ];

    for (name, cipher) in &ciphers {
        let encrypted = cipher.encrypt(text).unwrap();
        assert_ne!(encrypted.to_lowercase(), text, "{}", name);
        assert_eq!(encrypted, encrypted.to_uppercase(), "{}", name);
        assert_eq!(cipher.decrypt(&encrypted).unwrap(), text, "{}", name);
    }
}

/// Bifid ciphertext decrypts to letters that a substitution key then unscrambles
#[test]
fn test_bifid_then_substitution() {
    let sub_key = "DIJAKLMNFOPQECRSTUVWXYZGBH";
    let message = "meetatdawn";

    let inner = substitution::encrypt(message, sub_key).unwrap();
    let outer = Bifid::new(WIKIPEDIA_SQUARE, 5).unwrap().encrypt(&inner).unwrap();

    let peeled = Bifid::new(WIKIPEDIA_SQUARE, 5).unwrap().decrypt(&outer).unwrap();
    assert_eq!(peeled, inner.to_lowercase());
    assert_eq!(substitution::decrypt(&peeled, sub_key, None).unwrap(), message);
}

/// A partly solved key leaves unknown letters as ciphertext
#[test]
fn test_partial_substitution_key() {
    let key = "DIJ.......................";
    let decrypted = Substitution::new(key, Some('.'))
        .unwrap()
        .decrypt("ABC XYZ, CAB!")
        .unwrap();
    assert_eq!(decrypted, "dij XYZ, jdi!");
}

/// Hill round-trips with an invertible key and refuses to decrypt without one
#[test]
fn test_hill_pipeline() {
    let encrypted = hill_cipher("ACT", "GYBNQKURP", HillMode::Encrypt).unwrap();
    assert_eq!(encrypted, "POH");
    assert_eq!(
        hill_cipher(&encrypted, "GYBNQKURP", HillMode::Decrypt).unwrap(),
        "ACT"
    );

    let hill = Hill::new("HILL").unwrap();
    assert!(hill.inverse_matrix().is_some());
    let text = "SHORTEXAMPLE";
    assert_eq!(hill.decrypt(&hill.encrypt(text).unwrap()).unwrap(), text);

    // det(AAAB) = 0, still fine for encrypting but not for decrypting
    let singular = Hill::new("AAAB").unwrap();
    assert!(singular.encrypt("HITHERE").is_err()); // odd length
    assert!(singular.encrypt("HI").is_ok());
    assert!(matches!(
        singular.decrypt("HI"),
        Err(CipherError::InvalidKey(_))
    ));
}

/// Binary rows split on a delimiter decode group by group
#[test]
fn test_baconian_from_delimited_text() {
    let mut rows = baconian_rows("HELLO");
    rows.extend(baconian_rows("WORLD"));
    let text = rows.join(" 2\n");

    let split = split_rows(&text, '2');
    assert_eq!(split.len(), 10);
    assert_eq!(decode_baconian(&split, " ").unwrap(), "HELLO WORLD");
    assert_eq!(decode_baconian(&split, "").unwrap(), "HELLOWORLD");
}

/// Baconian output can itself be substitution ciphertext
#[test]
fn test_baconian_then_substitution() {
    let sub_key = "DIJAKLMNFOPQECRSTUVWXYZGBH";
    let hidden = substitution::encrypt("secret", sub_key).unwrap();

    let decoded = decode_baconian(&baconian_rows(&hidden), " ").unwrap();
    assert_eq!(decoded, hidden);
    assert_eq!(substitution::decrypt(&decoded, sub_key, None).unwrap(), "secret");
}

/// Non-alphabetic input is rejected rather than silently skipped
#[test]
fn test_invalid_input_errors() {
    let vigenere = Vigenere::new("KEY").unwrap();
    assert!(matches!(
        vigenere.encrypt("hello world"),
        Err(CipherError::InvalidInput(_))
    ));
    assert!(matches!(Vigenere::new(""), Err(CipherError::InvalidKey(_))));
    assert!(matches!(
        Bifid::new(WIKIPEDIA_SQUARE, 0),
        Err(CipherError::InvalidInput(_))
    ));
    assert!(index_of_coincidence("A").is_err());
}

/// Settings written to disk load back, and a missing file means defaults
#[test]
fn test_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    assert_eq!(Settings::load(Some(&path)).unwrap(), Settings::default());

    let mut settings = Settings::default();
    settings.max_key_length = 12;
    settings.bifid.key_square = Some(WIKIPEDIA_SQUARE.to_string());
    settings.substitution.dummy = Some('.');
    settings.save(&path).unwrap();

    assert_eq!(Settings::load(Some(&path)).unwrap(), settings);
}
