//! ## Substitution-scoring matrices for alignment
//!
//! A [`ScoringMatrix`] pairs a runtime alphabet with a dense table of integer
//! substitution scores and a single linear gap penalty. Rows index the symbol
//! drawn from the first (reference) sequence and columns the symbol from the
//! second (query) sequence, and the table is *not* required to be symmetric:
//! `score(a, b)` and `score(b, a)` may differ, matching the general matrix
//! file format.
//!
//! Matrices are typically read from a text file — the format is described on
//! the [`FromStr`](std::str::FromStr) implementation — but can also be built
//! programmatically with [`ScoringMatrix::new`] or
//! [`ScoringMatrix::uniform`].

use crate::data::{
    err::{MatrixFormatError, WithPathContext},
    mappings::SymbolIndexMap,
};
use std::{
    fmt::Display,
    io::{Error as IOError, ErrorKind},
    path::Path,
};

mod parse;

/// A substitution-scoring matrix over a runtime alphabet, with a linear
/// per-residue gap penalty.
///
/// The gap penalty is expected to be non-positive (a positive value would
/// make insertions profitable); it is stored and applied exactly as given.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ScoringMatrix {
    weights:     Vec<i32>,
    mapping:     SymbolIndexMap,
    gap_penalty: i32,
}

impl ScoringMatrix {
    /// Creates a new [`ScoringMatrix`] from a symbol mapping, a row-major
    /// score table, and a gap penalty.
    ///
    /// ## Errors
    ///
    /// Returns [`MatrixFormatError::Dimensions`] if the table does not hold
    /// exactly one entry per ordered symbol pair.
    pub fn new(mapping: SymbolIndexMap, weights: Vec<i32>, gap_penalty: i32) -> Result<Self, MatrixFormatError> {
        if weights.len() != mapping.len() * mapping.len() {
            return Err(MatrixFormatError::Dimensions {
                symbols: mapping.len(),
                entries: weights.len(),
            });
        }

        Ok(ScoringMatrix {
            weights,
            mapping,
            gap_penalty,
        })
    }

    /// Creates a new [`ScoringMatrix`] with a fixed `matching` score,
    /// `mismatch` score, and `gap_penalty` over the given alphabet.
    ///
    /// ## Errors
    ///
    /// Returns a [`MatrixFormatError`] if the alphabet is empty, contains a
    /// non-graphic byte, or declares the same symbol twice.
    pub fn uniform(alphabet: &[u8], matching: i32, mismatch: i32, gap_penalty: i32) -> Result<Self, MatrixFormatError> {
        let mapping = SymbolIndexMap::new(alphabet)?;
        let n = mapping.len();

        let mut weights = vec![mismatch; n * n];
        for i in 0..n {
            weights[i * n + i] = matching;
        }

        Ok(ScoringMatrix {
            weights,
            mapping,
            gap_penalty,
        })
    }

    /// Reads and parses a scoring matrix from a file.
    ///
    /// ## Errors
    ///
    /// Will return `Err` if the file cannot be read, or with
    /// [`ErrorKind::InvalidData`] if its contents are not a valid matrix. The
    /// file path is included in the error message and the underlying error is
    /// preserved as the source.
    pub fn from_filename<P>(filename: P) -> std::io::Result<Self>
    where
        P: AsRef<Path>, {
        let path = filename.as_ref();

        let text = std::fs::read_to_string(path).map_err(|e| {
            IOError::new(
                e.kind(),
                WithPathContext {
                    context: format!("Couldn't read scoring matrix file '{}'", path.display()),
                    source:  e,
                },
            )
        })?;

        text.parse().map_err(|e: MatrixFormatError| {
            IOError::new(
                ErrorKind::InvalidData,
                WithPathContext {
                    context: format!("Couldn't parse scoring matrix file '{}'", path.display()),
                    source:  e,
                },
            )
        })
    }

    /// For a given `ref_symbol` and `query_symbol`, retrieves the
    /// substitution score stored in the matrix, or `None` if either symbol is
    /// outside the alphabet.
    #[inline]
    #[must_use]
    pub fn score(&self, ref_symbol: u8, query_symbol: u8) -> Option<i32> {
        let i = self.mapping.index_of(ref_symbol)?;
        let j = self.mapping.index_of(query_symbol)?;
        Some(self.weight(i, j))
    }

    /// Retrieves the score for a pair of dense symbol indices. Used by the
    /// alignment inner loops after the sequences have been validated.
    #[inline]
    #[must_use]
    pub(crate) fn weight(&self, i: usize, j: usize) -> i32 {
        self.weights[i * self.mapping.len() + j]
    }

    /// The fixed per-residue gap penalty.
    #[inline]
    #[must_use]
    pub const fn gap_penalty(&self) -> i32 {
        self.gap_penalty
    }

    /// The alphabet mapping underlying the matrix.
    #[inline]
    #[must_use]
    pub const fn mapping(&self) -> &SymbolIndexMap {
        &self.mapping
    }
}

impl Display for ScoringMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.mapping.len();

        let mut col_widths = vec![0; n];
        for row in self.weights.chunks_exact(n) {
            for (width, val) in col_widths.iter_mut().zip(row) {
                *width = (*width).max(val.to_string().len());
            }
        }
        for width in col_widths.iter_mut().skip(1) {
            *width += 1;
        }

        let symbols = self.mapping.symbols();

        write!(f, "   ")?;
        for (symbol, width) in symbols.iter().zip(&col_widths) {
            write!(f, "{symbol:>width$}", symbol = *symbol as char)?;
        }
        writeln!(f)?;

        for (row, symbol) in self.weights.chunks_exact(n).zip(symbols) {
            write!(f, "{symbol}  ", symbol = *symbol as char)?;
            for (val, width) in row.iter().zip(&col_widths) {
                write!(f, "{val:>width$}")?;
            }
            writeln!(f)?;
        }

        write!(f, "Gap penalty: {}", self.gap_penalty)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn create_simple() {
        let result1 = ScoringMatrix::new(SymbolIndexMap::new(b"AB").unwrap(), vec![1, 0, 0, 1], -2).unwrap();
        let result2 = ScoringMatrix::uniform(b"AB", 1, 0, -2).unwrap();

        assert_eq!(result1, result2);
    }

    #[test]
    fn rejects_bad_dimensions() {
        let mapping = SymbolIndexMap::new(b"AB").unwrap();
        assert_eq!(
            ScoringMatrix::new(mapping, vec![1, 0, 0], -2),
            Err(MatrixFormatError::Dimensions { symbols: 2, entries: 3 })
        );
    }

    #[test]
    fn score_lookup_handles_case_and_foreign_symbols() {
        let matrix = ScoringMatrix::uniform(b"ACGT", 2, -5, -6).unwrap();

        assert_eq!(matrix.score(b'A', b'A'), Some(2));
        assert_eq!(matrix.score(b'a', b'C'), Some(-5));
        assert_eq!(matrix.score(b'A', b'N'), None);
        assert_eq!(matrix.gap_penalty(), -6);
    }

    #[test]
    fn asymmetric_scores_are_preserved() {
        let mapping = SymbolIndexMap::new(b"AB").unwrap();
        let matrix = ScoringMatrix::new(mapping, vec![1, 3, -3, 1], -5).unwrap();

        assert_eq!(matrix.score(b'A', b'B'), Some(3));
        assert_eq!(matrix.score(b'B', b'A'), Some(-3));
    }

    #[test]
    fn display_is_column_aligned() {
        let matrix = ScoringMatrix::uniform(b"AB", 10, -1, -2).unwrap();
        let shown = matrix.to_string();

        assert_eq!(shown, "    A  B\nA  10 -1\nB  -1 10\nGap penalty: -2");
    }
}
