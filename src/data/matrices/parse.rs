use crate::data::{err::MatrixFormatError, mappings::SymbolIndexMap, matrices::ScoringMatrix};
use std::str::FromStr;

/// Parses a scoring matrix from its text format.
///
/// The first content line lists the N alphabet symbols, whitespace-separated.
/// The next N lines each contain N whitespace-separated integers, where row
/// `i`, column `j` holds the score for aligning symbol `i` (from the first
/// sequence) against symbol `j` (from the second). The final content line is
/// a single integer gap penalty, conventionally non-positive. Blank lines and
/// lines beginning with `#` are ignored; any other content after the gap
/// penalty line is rejected.
impl FromStr for ScoringMatrix {
    type Err = MatrixFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().filter(|line| {
            let trimmed = line.trim_start();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        });

        let Some(alphabet_line) = lines.next() else {
            return Err(MatrixFormatError::EmptyAlphabet);
        };

        let mut alphabet = Vec::new();
        for token in alphabet_line.split_whitespace() {
            match token.as_bytes() {
                [symbol] => alphabet.push(*symbol),
                _ => return Err(MatrixFormatError::InvalidAlphabetSymbol(token.to_string())),
            }
        }
        let mapping = SymbolIndexMap::new(&alphabet)?;
        let n = mapping.len();

        let mut weights = Vec::with_capacity(n * n);
        for row in 0..n {
            let Some(line) = lines.next() else {
                return Err(MatrixFormatError::MissingRows { expected: n, found: row });
            };

            let entries: Vec<&str> = line.split_whitespace().collect();
            if entries.len() != n {
                return Err(MatrixFormatError::RowWidth {
                    row:      row + 1,
                    expected: n,
                    found:    entries.len(),
                });
            }

            for entry in entries {
                let score = entry.parse().map_err(|_| MatrixFormatError::InvalidScore {
                    row:   row + 1,
                    entry: entry.to_string(),
                })?;
                weights.push(score);
            }
        }

        let Some(gap_line) = lines.next() else {
            return Err(MatrixFormatError::MissingGapPenalty);
        };

        let gap_penalty = match gap_line.split_whitespace().collect::<Vec<_>>().as_slice() {
            [token] => token
                .parse()
                .map_err(|_| MatrixFormatError::InvalidGapPenalty((*token).to_string()))?,
            _ => return Err(MatrixFormatError::InvalidGapPenalty(gap_line.trim().to_string())),
        };

        if lines.next().is_some() {
            return Err(MatrixFormatError::TrailingContent);
        }

        ScoringMatrix::new(mapping, weights, gap_penalty)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    static DNA_MATRIX: &str = "A C G T\n1 -1 -1 -1\n-1 1 -1 -1\n-1 -1 1 -1\n-1 -1 -1 1\n-2\n";

    #[test]
    fn parses_well_formed_matrix() {
        let matrix: ScoringMatrix = DNA_MATRIX.parse().unwrap();

        assert_eq!(matrix.mapping().symbols(), b"ACGT");
        assert_eq!(matrix.score(b'A', b'A'), Some(1));
        assert_eq!(matrix.score(b'G', b'T'), Some(-1));
        assert_eq!(matrix.gap_penalty(), -2);
        assert_eq!(Ok(matrix), ScoringMatrix::uniform(b"ACGT", 1, -1, -2));
    }

    #[test]
    fn parses_asymmetric_scores() {
        let matrix: ScoringMatrix = "A B\n1 3\n-3 1\n-5".parse().unwrap();

        assert_eq!(matrix.score(b'A', b'B'), Some(3));
        assert_eq!(matrix.score(b'B', b'A'), Some(-3));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let text = "# identity matrix\n\nA C G T\n1 -1 -1 -1\n-1 1 -1 -1\n\n-1 -1 1 -1\n-1 -1 -1 1\n# gap\n-2\n\n";
        let matrix: ScoringMatrix = text.parse().unwrap();

        assert_eq!(matrix.gap_penalty(), -2);
    }

    #[test]
    fn accepts_crlf_line_endings() {
        let text = DNA_MATRIX.replace('\n', "\r\n");
        assert!(text.parse::<ScoringMatrix>().is_ok());
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!("".parse::<ScoringMatrix>(), Err(MatrixFormatError::EmptyAlphabet));
        assert_eq!("\n\n".parse::<ScoringMatrix>(), Err(MatrixFormatError::EmptyAlphabet));
    }

    #[test]
    fn rejects_multichar_alphabet_token() {
        assert_eq!(
            "AC G T\n".parse::<ScoringMatrix>(),
            Err(MatrixFormatError::InvalidAlphabetSymbol("AC".to_string()))
        );
    }

    #[test]
    fn rejects_missing_rows() {
        assert_eq!(
            "A C\n1 -1\n".parse::<ScoringMatrix>(),
            Err(MatrixFormatError::MissingRows { expected: 2, found: 1 })
        );
    }

    #[test]
    fn rejects_wrong_row_width() {
        assert_eq!(
            "A C\n1 -1 7\n-1 1\n-2".parse::<ScoringMatrix>(),
            Err(MatrixFormatError::RowWidth {
                row:      1,
                expected: 2,
                found:    3,
            })
        );
    }

    #[test]
    fn rejects_non_integer_entry() {
        assert_eq!(
            "A C\n1 x\n-1 1\n-2".parse::<ScoringMatrix>(),
            Err(MatrixFormatError::InvalidScore {
                row:   1,
                entry: "x".to_string(),
            })
        );
    }

    #[test]
    fn rejects_missing_gap_penalty() {
        assert_eq!(
            "A C\n1 -1\n-1 1\n".parse::<ScoringMatrix>(),
            Err(MatrixFormatError::MissingGapPenalty)
        );
    }

    #[test]
    fn rejects_malformed_gap_line() {
        assert_eq!(
            "A C\n1 -1\n-1 1\n-2 -3".parse::<ScoringMatrix>(),
            Err(MatrixFormatError::InvalidGapPenalty("-2 -3".to_string()))
        );
        assert_eq!(
            "A C\n1 -1\n-1 1\ngap".parse::<ScoringMatrix>(),
            Err(MatrixFormatError::InvalidGapPenalty("gap".to_string()))
        );
    }

    #[test]
    fn rejects_trailing_content() {
        assert_eq!(
            "A C\n1 -1\n-1 1\n-2\n0 0".parse::<ScoringMatrix>(),
            Err(MatrixFormatError::TrailingContent)
        );
    }

    #[test]
    fn positive_gap_penalty_is_accepted() {
        let matrix: ScoringMatrix = "A C\n1 -1\n-1 1\n3".parse().unwrap();
        assert_eq!(matrix.gap_penalty(), 3);
    }
}
