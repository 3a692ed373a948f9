use std::fmt;

/// The filled Needleman–Wunsch score table for a pair of sequences.
///
/// Row `i` corresponds to the length-`i` prefix of the first (reference)
/// sequence and column `j` to the length-`j` prefix of the second (query)
/// sequence, so the table has `(len1 + 1) × (len2 + 1)` cells. Cell `(i, j)`
/// holds the optimal score for aligning those two prefixes, and the
/// bottom-right cell holds the optimal global score.
///
/// The cells are stored row-major in a single flat allocation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ScoreTable {
    data: Vec<i32>,
    cols: usize,
}

impl ScoreTable {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        ScoreTable {
            data: vec![0; rows * cols],
            cols,
        }
    }

    /// Retrieves the score at row `i`, column `j`.
    ///
    /// ## Panics
    ///
    /// Panics if `(i, j)` is outside the table.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> i32 {
        self.data[i * self.cols + j]
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, value: i32) {
        self.data[i * self.cols + j] = value;
    }

    /// The number of rows, i.e. one more than the reference length.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.data.len() / self.cols
    }

    /// The number of columns, i.e. one more than the query length.
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// The optimal global alignment score, held by the bottom-right cell.
    #[inline]
    #[must_use]
    pub fn score(&self) -> i32 {
        self.data[self.data.len() - 1]
    }

    /// Returns a display adapter that prints the grid with the residues of
    /// the sequences it was built from as row and column labels.
    ///
    /// ## Panics
    ///
    /// Panics if the sequence lengths do not match the table dimensions.
    #[must_use]
    pub fn labeled<'a>(&'a self, reference: &'a [u8], query: &'a [u8]) -> LabeledScoreTable<'a> {
        assert_eq!(self.rows(), reference.len() + 1);
        assert_eq!(self.cols(), query.len() + 1);

        LabeledScoreTable {
            table: self,
            reference,
            query,
        }
    }

    fn fmt_grid(&self, f: &mut fmt::Formatter<'_>, labels: Option<(&[u8], &[u8])>) -> fmt::Result {
        let mut buff = itoa::Buffer::new();

        let mut col_widths = vec![0usize; self.cols];
        for row in self.data.chunks_exact(self.cols) {
            for (width, &val) in col_widths.iter_mut().zip(row) {
                *width = (*width).max(buff.format(val).len());
            }
        }
        for width in col_widths.iter_mut().skip(1) {
            *width += 1;
        }

        if let Some((_, query)) = labels {
            write!(f, "   ")?;
            for (j, width) in col_widths.iter().enumerate() {
                if j == 0 {
                    write!(f, "{:width$}", "", width = *width)?;
                } else {
                    write!(f, "{symbol:>width$}", symbol = query[j - 1] as char, width = *width)?;
                }
            }
            writeln!(f)?;
        }

        for (i, row) in self.data.chunks_exact(self.cols).enumerate() {
            match labels {
                Some((reference, _)) if i > 0 => write!(f, "{symbol}  ", symbol = reference[i - 1] as char)?,
                Some(_) => write!(f, "   ")?,
                None => {}
            }
            for (&val, width) in row.iter().zip(&col_widths) {
                write!(f, "{val:>width$}", val = buff.format(val), width = *width)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for ScoreTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_grid(f, None)
    }
}

/// A display adapter pairing a [`ScoreTable`] with the sequences it was built
/// from. Created by [`ScoreTable::labeled`].
pub struct LabeledScoreTable<'a> {
    table:     &'a ScoreTable,
    reference: &'a [u8],
    query:     &'a [u8],
}

impl fmt::Display for LabeledScoreTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.table.fmt_grid(f, Some((self.reference, self.query)))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn two_by_two() -> ScoreTable {
        let mut table = ScoreTable::new(2, 2);
        table.set(0, 1, -2);
        table.set(1, 0, -2);
        table.set(1, 1, 1);
        table
    }

    #[test]
    fn indexing_is_row_major() {
        let table = two_by_two();

        assert_eq!(table.rows(), 2);
        assert_eq!(table.cols(), 2);
        assert_eq!(table.get(0, 0), 0);
        assert_eq!(table.get(0, 1), -2);
        assert_eq!(table.get(1, 0), -2);
        assert_eq!(table.get(1, 1), 1);
        assert_eq!(table.score(), 1);
    }

    #[test]
    fn display_is_column_aligned() {
        assert_eq!(two_by_two().to_string(), " 0 -2\n-2  1\n");
    }

    #[test]
    fn labeled_display_adds_residues() {
        let table = two_by_two();
        assert_eq!(table.labeled(b"A", b"A").to_string(), "       A\n    0 -2\nA  -2  1\n");
    }
}
