//! Bifid cipher: Polybius-square fractionation over a period.
//!
//! Each letter becomes a `(row, col)` coordinate in a 5×5 key square. Within
//! each block of `period` letters the coordinates are written out as all
//! rows followed by all columns, then re-read in pairs. Decryption reverses
//! the split.
//!
//! The square omits `J`; message `J`s are folded into `I`.

use std::fmt;
use std::num::NonZeroUsize;

use crate::ciphers::Cipher;
use crate::error::CipherError;

/// Side length of the square.
pub const SQUARE_SIDE: usize = 5;

/// Number of letters in the square.
pub const SQUARE_LEN: usize = SQUARE_SIDE * SQUARE_SIDE;

/// Position of a letter in the key square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// A validated 5×5 key square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySquare {
    letters: [char; SQUARE_LEN],
}

impl KeySquare {
    /// Builds a key square from 25 distinct letters, none of them `J`.
    ///
    /// The key is upper-cased first.
    pub fn new(key: &str) -> Result<Self, CipherError> {
        let chars: Vec<char> = key.chars().map(|c| c.to_ascii_uppercase()).collect();
        if chars.len() != SQUARE_LEN {
            return Err(CipherError::InvalidKey(format!(
                "key square must have {} letters, got {}",
                SQUARE_LEN,
                chars.len()
            )));
        }

        let mut letters = ['A'; SQUARE_LEN];
        for (i, &c) in chars.iter().enumerate() {
            if !c.is_ascii_alphabetic() {
                return Err(CipherError::InvalidKey(format!(
                    "key square contains non-alphabetic character '{}'",
                    c
                )));
            }
            if c == 'J' {
                return Err(CipherError::InvalidKey(
                    "key square contains a J".to_string(),
                ));
            }
            if chars[..i].contains(&c) {
                return Err(CipherError::InvalidKey(format!(
                    "key square repeats '{}'",
                    c
                )));
            }
            letters[i] = c;
        }

        let square = Self { letters };
        tracing::debug!("key square:\n{}", square);
        Ok(square)
    }

    /// Looks up the coordinate of `c`, folding `J` to `I`.
    pub fn coord_of(&self, c: char) -> Result<Coord, CipherError> {
        let c = match c.to_ascii_uppercase() {
            'J' => 'I',
            other => other,
        };
        let index = self
            .letters
            .iter()
            .position(|&l| l == c)
            .ok_or_else(|| CipherError::InvalidInput(format!("'{}' is not in the key square", c)))?;
        Ok(Coord::new(
            (index / SQUARE_SIDE) as u8,
            (index % SQUARE_SIDE) as u8,
        ))
    }

    /// The letter at `coord`.
    pub fn letter_at(&self, coord: Coord) -> Result<char, CipherError> {
        let (row, col) = (coord.row as usize, coord.col as usize);
        if row >= SQUARE_SIDE || col >= SQUARE_SIDE {
            return Err(CipherError::InvalidInput(format!(
                "coordinate ({}, {}) is outside the key square",
                row, col
            )));
        }
        Ok(self.letters[row * SQUARE_SIDE + col])
    }
}

impl fmt::Display for KeySquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..SQUARE_SIDE {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;
        for (row, letters) in self.letters.chunks(SQUARE_SIDE).enumerate() {
            write!(f, " {}", row)?;
            for letter in letters {
                write!(f, " {}", letter)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Maps every character of `text` to its square coordinate.
pub fn chars_to_coords(text: &str, square: &KeySquare) -> Result<Vec<Coord>, CipherError> {
    text.chars().map(|c| square.coord_of(c)).collect()
}

/// Maps coordinates back to (upper-case) square letters.
pub fn coords_to_chars(coords: &[Coord], square: &KeySquare) -> Result<String, CipherError> {
    coords.iter().map(|&c| square.letter_at(c)).collect()
}

/// Within each block of `period` coordinates, writes all rows then all
/// columns and re-pairs the stream sequentially. The last block may be short.
pub fn fractionate(coords: &[Coord], period: NonZeroUsize) -> Vec<Coord> {
    let mut out = Vec::with_capacity(coords.len());
    for block in coords.chunks(period.get()) {
        let stream: Vec<u8> = block
            .iter()
            .map(|c| c.row)
            .chain(block.iter().map(|c| c.col))
            .collect();
        tracing::trace!(?stream, "fractionated block");
        out.extend(stream.chunks(2).map(|pair| Coord::new(pair[0], pair[1])));
    }
    out
}

/// Inverse of [`fractionate`]: flattens each block as row, col pairs, then
/// takes the first half as rows and the second half as columns.
pub fn defractionate(coords: &[Coord], period: NonZeroUsize) -> Vec<Coord> {
    let mut out = Vec::with_capacity(coords.len());
    for block in coords.chunks(period.get()) {
        let stream: Vec<u8> = block.iter().flat_map(|c| [c.row, c.col]).collect();
        tracing::trace!(?stream, "defractionating block");
        let len = block.len();
        out.extend((0..len).map(|i| Coord::new(stream[i], stream[i + len])));
    }
    out
}

/// A Bifid cipher: key square plus period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bifid {
    square: KeySquare,
    period: NonZeroUsize,
}

impl Bifid {
    /// Creates a Bifid cipher. `period` must be at least 1.
    pub fn new(key: &str, period: usize) -> Result<Self, CipherError> {
        let period = NonZeroUsize::new(period)
            .ok_or_else(|| CipherError::InvalidInput("period must be at least 1".to_string()))?;
        Ok(Self {
            square: KeySquare::new(key)?,
            period,
        })
    }

    pub fn square(&self) -> &KeySquare {
        &self.square
    }

    pub fn period(&self) -> usize {
        self.period.get()
    }
}

impl Cipher for Bifid {
    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        let coords = chars_to_coords(plaintext, &self.square)?;
        let mixed = fractionate(&coords, self.period);
        Ok(coords_to_chars(&mixed, &self.square)?.to_ascii_uppercase())
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let coords = chars_to_coords(ciphertext, &self.square)?;
        let unmixed = defractionate(&coords, self.period);
        Ok(coords_to_chars(&unmixed, &self.square)?.to_ascii_lowercase())
    }
}

/// Encrypts `plaintext` with the given key square and period.
pub fn encrypt(plaintext: &str, key: &str, period: usize) -> Result<String, CipherError> {
    Bifid::new(key, period)?.encrypt(plaintext)
}

/// Decrypts `ciphertext` with the given key square and period.
pub fn decrypt(ciphertext: &str, key: &str, period: usize) -> Result<String, CipherError> {
    Bifid::new(key, period)?.decrypt(ciphertext)
}
