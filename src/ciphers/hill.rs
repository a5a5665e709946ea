//! Hill cipher: block matrix multiplication modulo 26.
//!
//! A key of n² letters fills an n×n matrix row by row. Text is split into
//! column vectors of n letters. Encryption multiplies each vector by the key
//! matrix. Decryption multiplies by its inverse modulo 26, which exists only
//! when the determinant is coprime with 26.

use std::fmt;

use crate::alphabet::{
    letter_to_ordinal, mod26, mod_inverse, ordinal_to_letter, ordinals, ALPHABET_LEN,
};
use crate::ciphers::Cipher;
use crate::error::CipherError;

/// Largest supported key matrix dimension.
///
/// The determinant and adjugate use cofactor expansion, whose cost grows
/// factorially with the dimension.
pub const MAX_MATRIX_SIZE: usize = 10;

type BlockFn = fn(&Matrix, &[i64]) -> Result<String, CipherError>;

/// A square matrix of integers reduced modulo 26.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    n: usize,
    /// Row-major cells, each in `0..26`.
    cells: Vec<i64>,
}

impl Matrix {
    /// Builds an n×n matrix from row-major values.
    pub fn new(n: usize, values: Vec<i64>) -> Result<Self, CipherError> {
        if n == 0 || values.len() != n * n {
            return Err(CipherError::InvalidKey(format!(
                "a {}x{} matrix needs {} values, got {}",
                n,
                n,
                n * n,
                values.len()
            )));
        }
        if n > MAX_MATRIX_SIZE {
            return Err(CipherError::InvalidKey(format!(
                "a {}x{} key matrix is larger than the supported {}x{}",
                n, n, MAX_MATRIX_SIZE, MAX_MATRIX_SIZE
            )));
        }
        let cells = values.into_iter().map(mod26).collect();
        Ok(Self { n, cells })
    }

    /// Interprets a key string of n² letters as an n×n matrix of ordinals.
    pub fn from_key(key: &str) -> Result<Self, CipherError> {
        let values = key
            .chars()
            .map(|c| {
                letter_to_ordinal(c)
                    .map(i64::from)
                    .map_err(|_| CipherError::InvalidKey(format!("'{}' is not a letter", c)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let n = integer_sqrt(values.len());
        if n == 0 || n * n != values.len() {
            return Err(CipherError::InvalidKey(format!(
                "key length {} is not a square number",
                values.len()
            )));
        }
        tracing::debug!(n, "key matrix dimensions");
        Self::new(n, values)
    }

    /// Dimension of the matrix.
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.cells[row * self.n + col]
    }

    /// Determinant modulo 26, computed by cofactor expansion along the first row.
    ///
    /// Takes O(n!) time. Dimensions are capped at [`MAX_MATRIX_SIZE`].
    pub fn determinant_mod26(&self) -> i64 {
        determinant(&self.cells, self.n)
    }

    /// Inverse modulo 26 via the adjugate.
    pub fn inverse_mod26(&self) -> Result<Self, CipherError> {
        let det = self.determinant_mod26();
        let det_inv = mod_inverse(det, ALPHABET_LEN).ok_or(CipherError::NotInvertible {
            value: det,
            modulus: ALPHABET_LEN,
        })?;
        tracing::debug!(det, det_inv, "key matrix determinant");

        let n = self.n;
        let mut cells = vec![0; n * n];
        if n == 1 {
            cells[0] = det_inv;
        } else {
            for row in 0..n {
                for col in 0..n {
                    // adj[row][col] = cofactor(col, row)
                    let minor = minor(&self.cells, n, col, row);
                    let sign = if (row + col) % 2 == 0 { 1 } else { -1 };
                    let cofactor = sign * determinant(&minor, n - 1);
                    cells[row * n + col] = mod26(det_inv * cofactor);
                }
            }
        }
        Ok(Self { n, cells })
    }

    /// `self × vector` modulo 26.
    pub fn multiply(&self, vector: &[i64]) -> Result<Vec<i64>, CipherError> {
        if vector.len() != self.n {
            return Err(CipherError::LengthMismatch {
                left: self.n,
                right: vector.len(),
            });
        }
        Ok((0..self.n)
            .map(|row| {
                let sum: i64 = (0..self.n).map(|col| self.get(row, col) * vector[col]).sum();
                mod26(sum)
            })
            .collect())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.n) {
            let cells: Vec<String> = row.iter().map(|v| format!("{:>2}", v)).collect();
            writeln!(f, "[{}]", cells.join(" "))?;
        }
        Ok(())
    }
}

fn integer_sqrt(len: usize) -> usize {
    let mut n = 0;
    while (n + 1) * (n + 1) <= len {
        n += 1;
    }
    n
}

/// The `(n-1)×(n-1)` matrix left after removing `skip_row` and `skip_col`.
fn minor(cells: &[i64], n: usize, skip_row: usize, skip_col: usize) -> Vec<i64> {
    let mut out = Vec::with_capacity((n - 1) * (n - 1));
    for row in (0..n).filter(|&r| r != skip_row) {
        for col in (0..n).filter(|&c| c != skip_col) {
            out.push(cells[row * n + col]);
        }
    }
    out
}

fn determinant(cells: &[i64], n: usize) -> i64 {
    match n {
        0 => 1,
        1 => mod26(cells[0]),
        2 => mod26(cells[0] * cells[3] - cells[1] * cells[2]),
        _ => {
            let mut det = 0;
            for col in 0..n {
                let sign = if col % 2 == 0 { 1 } else { -1 };
                let sub = determinant(&minor(cells, n, 0, col), n - 1);
                det = mod26(det + sign * cells[col] * sub);
            }
            det
        }
    }
}

/// Encrypts one block: `matrix × vector`, mapped to upper-case letters.
pub fn encrypt_block(matrix: &Matrix, vector: &[i64]) -> Result<String, CipherError> {
    matrix
        .multiply(vector)?
        .into_iter()
        .map(ordinal_to_letter)
        .collect()
}

/// Decrypts one block with an already-inverted key matrix.
pub fn decrypt_block(inverse: &Matrix, vector: &[i64]) -> Result<String, CipherError> {
    encrypt_block(inverse, vector)
}

/// Direction for [`hill_cipher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HillMode {
    Encrypt,
    Decrypt,
}

/// A Hill cipher with its key matrix and, when it exists, the inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hill {
    key: Matrix,
    inverse: Option<Matrix>,
}

impl Hill {
    /// Creates a cipher from an n²-letter key.
    ///
    /// A key whose matrix is not invertible is accepted here. It can still
    /// encrypt, and decryption reports `InvalidKey`.
    pub fn new(key: &str) -> Result<Self, CipherError> {
        Ok(Self::from_matrix(Matrix::from_key(key)?))
    }

    pub fn from_matrix(key: Matrix) -> Self {
        let inverse = key.inverse_mod26().ok();
        Self { key, inverse }
    }

    pub fn key_matrix(&self) -> &Matrix {
        &self.key
    }

    pub fn inverse_matrix(&self) -> Option<&Matrix> {
        self.inverse.as_ref()
    }

    fn blocks(&self, text: &str) -> Result<Vec<Vec<i64>>, CipherError> {
        let values: Vec<i64> = ordinals(text)?.into_iter().map(i64::from).collect();
        let n = self.key.size();
        if values.len() % n != 0 {
            return Err(CipherError::InvalidInput(format!(
                "text length {} is not a multiple of the block size {}",
                values.len(),
                n
            )));
        }
        Ok(values.chunks(n).map(<[i64]>::to_vec).collect())
    }

    fn run(&self, matrix: &Matrix, text: &str, block_fn: BlockFn) -> Result<String, CipherError> {
        let mut out = String::with_capacity(text.len());
        for vector in self.blocks(text)? {
            let block = block_fn(matrix, &vector)?;
            tracing::trace!(?vector, block = %block, "hill block");
            out.push_str(&block);
        }
        Ok(out)
    }
}

impl Cipher for Hill {
    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        self.run(&self.key, plaintext, encrypt_block)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let inverse = self.inverse.as_ref().ok_or_else(|| {
            CipherError::InvalidKey(format!(
                "key matrix determinant {} is not invertible modulo 26",
                self.key.determinant_mod26()
            ))
        })?;
        self.run(inverse, ciphertext, decrypt_block)
    }
}

/// Applies the Hill cipher to `text` with an n²-letter `key`.
pub fn hill_cipher(text: &str, key: &str, mode: HillMode) -> Result<String, CipherError> {
    let hill = Hill::new(key)?;
    match mode {
        HillMode::Encrypt => hill.encrypt(text),
        HillMode::Decrypt => hill.decrypt(text),
    }
}
