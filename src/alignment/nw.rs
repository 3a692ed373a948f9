#![allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]

use crate::{
    alignment::{Alignment, AlignmentError, ScoreTable},
    data::matrices::ScoringMatrix,
};

/// Needleman–Wunsch algorithm, yielding the optimal global alignment score.
///
/// Provides the globally optimal, end-to-end pairwise alignment score (1)
/// under a linear gap model: every aligned pair of residues is scored by the
/// substitution matrix, and every inserted or deleted residue is charged the
/// matrix's fixed gap penalty.
///
/// ## Example
///
/// ```
/// # use needle::{alignment::nw_score, data::matrices::ScoringMatrix};
/// let matrix = ScoringMatrix::uniform(b"ACGT", 1, -1, -2).unwrap();
/// let score = nw_score(b"GATTACA", b"GCATGCA", &matrix).unwrap();
/// assert_eq!(score, 1);
/// ```
///
/// ## Errors
///
/// Returns [`AlignmentError::InvalidSymbol`] if either sequence contains a
/// symbol outside the matrix's alphabet.
///
/// ## Complexity
///
/// Time: $O(mn)$
///
/// Space: $O(n)$ where $n$ is the length of the query
///
/// ## Citations
///
/// 1. Needleman, Saul B. & Wunsch, Christian D. (1970). "A general method
///    applicable to the search for similarities in the amino acid sequence
///    of two proteins". Journal of Molecular Biology. 48 (3): 443–453. doi:
///    <https://doi.org/10.1016/0022-2836(70)90057-4>
///
pub fn nw_score(reference: &[u8], query: &[u8], matrix: &ScoringMatrix) -> Result<i32, AlignmentError> {
    let (ref_indices, query_indices) = validate_and_map(reference, query, matrix)?;
    let gap = matrix.gap_penalty();

    // first row
    let mut current: Vec<i32> = (0..=query_indices.len()).map(|j| gap * j as i32).collect();

    for (i, &r) in ref_indices.iter().enumerate() {
        // first column
        let mut diag = current[0];
        current[0] = gap * (i as i32 + 1);

        for (j, &q) in query_indices.iter().enumerate() {
            let score = (diag + matrix.weight(r, q))
                .max(current[j + 1] + gap)
                .max(current[j] + gap);

            diag = current[j + 1];
            current[j + 1] = score;
        }
    }

    Ok(current[query_indices.len()])
}

/// Needleman–Wunsch algorithm, yielding the full dynamic-programming score
/// table.
///
/// Builds the `(len1 + 1) × (len2 + 1)` table whose cell `(i, j)` holds the
/// optimal score for aligning the length-`i` prefix of `reference` against
/// the length-`j` prefix of `query`. Row and column 0 represent the empty
/// prefix, so `table[i][0]` and `table[0][j]` hold pure gap runs. The
/// bottom-right cell holds the optimal global score, and the completed table
/// can be handed to [`nw_traceback`] to reconstruct one optimal alignment.
///
/// Ties between predecessor cells are not resolved here; each cell stores
/// only the maximum value.
///
/// ## Example
///
/// ```
/// # use needle::{alignment::nw_score_table, data::matrices::ScoringMatrix};
/// let matrix = ScoringMatrix::uniform(b"ACGT", 1, -1, -2).unwrap();
/// let table = nw_score_table(b"AC", b"AC", &matrix).unwrap();
/// assert_eq!(table.get(0, 2), -4);
/// assert_eq!(table.score(), 2);
/// ```
///
/// ## Errors
///
/// Returns [`AlignmentError::InvalidSymbol`] if either sequence contains a
/// symbol outside the matrix's alphabet. No partial table is produced.
///
/// ## Complexity
///
/// Time: $O(mn)$
///
/// Space: $O(mn)$
pub fn nw_score_table(reference: &[u8], query: &[u8], matrix: &ScoringMatrix) -> Result<ScoreTable, AlignmentError> {
    let (ref_indices, query_indices) = validate_and_map(reference, query, matrix)?;
    let gap = matrix.gap_penalty();

    let mut table = ScoreTable::new(reference.len() + 1, query.len() + 1);

    for i in 1..=reference.len() {
        table.set(i, 0, gap * i as i32);
    }
    for j in 1..=query.len() {
        table.set(0, j, gap * j as i32);
    }

    for (i, &r) in ref_indices.iter().enumerate() {
        for (j, &q) in query_indices.iter().enumerate() {
            let diag = table.get(i, j) + matrix.weight(r, q);
            let up = table.get(i, j + 1) + gap;
            let left = table.get(i + 1, j) + gap;

            table.set(i + 1, j + 1, diag.max(up).max(left));
        }
    }

    Ok(table)
}

/// Reconstructs one optimal global alignment from a completed score table.
///
/// Walks the table from the bottom-right cell to the top-left cell,
/// re-deriving the predecessor candidates of each cell from the table. When
/// more than one predecessor explains a cell's score, the tie is broken by a
/// fixed priority so the reconstruction is deterministic:
///
/// 1. **left** — consume a query residue, placing a gap in the reference
///    track;
/// 2. **up** — consume a reference residue, placing a gap in the query track;
/// 3. **diagonal** — align the two residues, taken by elimination.
///
/// Once either sequence is exhausted the remaining moves are forced gap
/// steps. Different priority orders produce different (equally optimal)
/// alignments, so this order is part of the function's contract.
///
/// `table` must have been produced by [`nw_score_table`] with the same
/// `reference`, `query`, and `matrix`; passing a mismatched table is a
/// contract violation with an unspecified (but non-UB) result. Dimension
/// mismatches are caught by debug assertions.
///
/// ## Example
///
/// ```
/// # use needle::{alignment::{nw_score_table, nw_traceback}, data::matrices::ScoringMatrix};
/// let matrix = ScoringMatrix::uniform(b"ACGT", 5, -4, -6).unwrap();
/// let table = nw_score_table(b"ACGTTGCA", b"ACTTGC", &matrix).unwrap();
/// let alignment = nw_traceback(&table, b"ACGTTGCA", b"ACTTGC", &matrix);
///
/// assert_eq!(alignment.score, 18);
/// assert_eq!(alignment.reference, b"ACGTTGCA");
/// assert_eq!(alignment.query, b"AC-TTGC-");
/// ```
///
/// ## Complexity
///
/// Time: $O(m + n)$
#[must_use]
pub fn nw_traceback(table: &ScoreTable, reference: &[u8], query: &[u8], matrix: &ScoringMatrix) -> Alignment {
    debug_assert_eq!(table.rows(), reference.len() + 1);
    debug_assert_eq!(table.cols(), query.len() + 1);

    let gap = matrix.gap_penalty();
    let (mut i, mut j) = (reference.len(), query.len());

    let mut ref_track = Vec::with_capacity(i + j);
    let mut query_track = Vec::with_capacity(i + j);

    while i > 0 || j > 0 {
        if j > 0 && (i == 0 || table.get(i, j - 1) + gap == table.get(i, j)) {
            j -= 1;
            ref_track.push(Alignment::GAP);
            query_track.push(query[j]);
        } else if i > 0 && (j == 0 || table.get(i - 1, j) + gap == table.get(i, j)) {
            i -= 1;
            ref_track.push(reference[i]);
            query_track.push(Alignment::GAP);
        } else {
            i -= 1;
            j -= 1;
            ref_track.push(reference[i]);
            query_track.push(query[j]);
        }
    }

    // The walk emits columns end to start
    ref_track.reverse();
    query_track.reverse();

    Alignment {
        score:     table.score(),
        reference: ref_track,
        query:     query_track,
    }
}

/// Needleman–Wunsch alignment, yielding one optimal global alignment and its
/// score.
///
/// Composes [`nw_score_table`] and [`nw_traceback`]; the score table is
/// dropped once the alignment has been extracted.
///
/// ## Example
///
/// ```
/// # use needle::{alignment::nw_alignment, data::matrices::ScoringMatrix};
/// let matrix = ScoringMatrix::uniform(b"ACGT", 1, -1, -2).unwrap();
/// let alignment = nw_alignment(b"GATTACA", b"GCATGCA", &matrix).unwrap();
///
/// assert_eq!(alignment.score, 1);
/// assert_eq!(alignment.reference, b"GATTACA");
/// assert_eq!(alignment.query, b"GCATGCA");
/// ```
///
/// ## Errors
///
/// Returns [`AlignmentError::InvalidSymbol`] if either sequence contains a
/// symbol outside the matrix's alphabet.
///
/// ## Complexity
///
/// Time: $O(mn)$
///
/// Space: $O(mn)$
pub fn nw_alignment(reference: &[u8], query: &[u8], matrix: &ScoringMatrix) -> Result<Alignment, AlignmentError> {
    let table = nw_score_table(reference, query, matrix)?;
    Ok(nw_traceback(&table, reference, query, matrix))
}

/// Validates both sequences against the matrix's alphabet, then maps them to
/// dense symbol indices for the fill loops.
fn validate_and_map(
    reference: &[u8], query: &[u8], matrix: &ScoringMatrix,
) -> Result<(Vec<usize>, Vec<usize>), AlignmentError> {
    let mapping = matrix.mapping();

    if let Some(symbol) = mapping.find_invalid(reference) {
        return Err(AlignmentError::InvalidSymbol(symbol));
    }
    if let Some(symbol) = mapping.find_invalid(query) {
        return Err(AlignmentError::InvalidSymbol(symbol));
    }

    let ref_indices = reference.iter().map(|&b| mapping.to_index(b)).collect();
    let query_indices = query.iter().map(|&b| mapping.to_index(b)).collect();
    Ok((ref_indices, query_indices))
}
