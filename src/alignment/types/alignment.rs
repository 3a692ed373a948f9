use crate::data::matrices::ScoringMatrix;
use std::fmt;

/// One optimal global pairwise alignment, pairing the optimal score with the
/// two gap-augmented tracks.
///
/// Both tracks always have equal length, and removing the gap markers from a
/// track reproduces the corresponding input sequence exactly.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Alignment {
    pub score:     i32,
    pub reference: Vec<u8>,
    pub query:     Vec<u8>,
}

impl Alignment {
    /// The marker used for gap positions in the aligned tracks.
    pub const GAP: u8 = b'-';

    /// The number of columns in the alignment.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.reference.len()
    }

    /// Returns `true` if the alignment has no columns, which occurs only when
    /// both input sequences were empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reference.is_empty()
    }

    /// Returns the reference track with gap markers removed.
    #[must_use]
    pub fn ungapped_reference(&self) -> Vec<u8> {
        self.reference.iter().copied().filter(|&b| b != Self::GAP).collect()
    }

    /// Returns the query track with gap markers removed.
    #[must_use]
    pub fn ungapped_query(&self) -> Vec<u8> {
        self.query.iter().copied().filter(|&b| b != Self::GAP).collect()
    }

    /// Replays the aligned columns through `matrix`: residue columns are
    /// scored by substitution and columns with a gap in either track are
    /// charged the gap penalty. Returns `None` if a residue column holds a
    /// symbol outside the matrix's alphabet.
    ///
    /// For an alignment produced with the same matrix, this reproduces
    /// [`score`](Alignment::score) exactly.
    #[must_use]
    pub fn score_with(&self, matrix: &ScoringMatrix) -> Option<i32> {
        let mut total = 0;
        for (&r, &q) in self.reference.iter().zip(&self.query) {
            total += if r == Self::GAP || q == Self::GAP {
                matrix.gap_penalty()
            } else {
                matrix.score(r, q)?
            };
        }
        Some(total)
    }

    /// Returns a display adapter that renders the tracks as interleaved
    /// blocks of at most `width` columns.
    ///
    /// ## Panics
    ///
    /// Panics if `width` is zero.
    #[must_use]
    pub fn wrapped(&self, width: usize) -> WrappedAlignment<'_> {
        assert!(width > 0, "wrap width must be nonzero");
        WrappedAlignment { alignment: self, width }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n",
            String::from_utf8_lossy(&self.reference),
            String::from_utf8_lossy(&self.query)
        )
    }
}

/// A display adapter that renders an [`Alignment`] wrapped to a fixed number
/// of columns. Created by [`Alignment::wrapped`].
pub struct WrappedAlignment<'a> {
    alignment: &'a Alignment,
    width:     usize,
}

impl fmt::Display for WrappedAlignment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let blocks = self
            .alignment
            .reference
            .chunks(self.width)
            .zip(self.alignment.query.chunks(self.width));

        for (i, (reference, query)) in blocks.enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", String::from_utf8_lossy(reference))?;
            writeln!(f, "{}", String::from_utf8_lossy(query))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn gapped() -> Alignment {
        Alignment {
            score:     0,
            reference: b"G-ATTACA".to_vec(),
            query:     b"GCATG-CA".to_vec(),
        }
    }

    #[test]
    fn gap_removal_round_trips() {
        let alignment = gapped();

        assert_eq!(alignment.len(), 8);
        assert_eq!(alignment.ungapped_reference(), b"GATTACA");
        assert_eq!(alignment.ungapped_query(), b"GCATGCA");
    }

    #[test]
    fn replay_scores_gap_and_residue_columns() {
        let matrix = ScoringMatrix::uniform(b"ACGT", 1, -1, -1).unwrap();

        // 5 matches, 1 mismatch, 2 gap columns
        assert_eq!(gapped().score_with(&matrix), Some(2));
    }

    #[test]
    fn replay_rejects_foreign_symbols() {
        let matrix = ScoringMatrix::uniform(b"ACGT", 1, -1, -1).unwrap();
        let alignment = Alignment {
            score:     0,
            reference: b"AN".to_vec(),
            query:     b"AA".to_vec(),
        };

        assert_eq!(alignment.score_with(&matrix), None);
    }

    #[test]
    fn wrapped_display_interleaves_blocks() {
        let shown = gapped().wrapped(5).to_string();
        assert_eq!(shown, "G-ATT\nGCATG\n\nACA\n-CA\n");
    }

    #[test]
    fn display_prints_both_tracks() {
        assert_eq!(gapped().to_string(), "G-ATTACA\nGCATG-CA\n");
    }
}
