use needle::{
    alignment::{Alignment, nw_alignment, nw_score, nw_score_table, nw_traceback},
    data::{fasta::FastaReader, matrices::ScoringMatrix},
};

static MATRIX_TEXT: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/identity.matrix"));
static PAIR_FASTA: &[u8] = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/pair.fasta"));

#[test]
fn full_pipeline_from_matrix_and_fasta() {
    let matrix: ScoringMatrix = MATRIX_TEXT.parse().unwrap();

    let records: Vec<_> = FastaReader::new(PAIR_FASTA).map(Result::unwrap).collect();
    assert_eq!(records.len(), 2);

    let alignment = nw_alignment(&records[0].sequence, &records[1].sequence, &matrix).unwrap();

    assert_eq!(alignment.score, 1);
    assert_eq!(alignment.reference, b"GATTACA");
    assert_eq!(alignment.query, b"GCATGCA");

    assert_eq!(alignment.ungapped_reference(), records[0].sequence);
    assert_eq!(alignment.ungapped_query(), records[1].sequence);
    assert_eq!(alignment.score_with(&matrix), Some(alignment.score));
}

#[test]
fn split_phases_match_the_composed_entry_point() {
    let matrix: ScoringMatrix = MATRIX_TEXT.parse().unwrap();
    let (reference, query) = (b"GATTACA".as_slice(), b"GCATGCA".as_slice());

    let table = nw_score_table(reference, query, &matrix).unwrap();
    assert_eq!(table.rows(), reference.len() + 1);
    assert_eq!(table.cols(), query.len() + 1);
    assert_eq!(table.get(0, 0), 0);

    let alignment = nw_traceback(&table, reference, query, &matrix);
    assert_eq!(Ok(alignment), nw_alignment(reference, query, &matrix));

    assert_eq!(nw_score(reference, query, &matrix).unwrap(), table.score());
}

#[test]
fn matrix_loads_from_a_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/identity.matrix");
    let matrix = ScoringMatrix::from_filename(path).unwrap();

    assert_eq!(matrix.mapping().symbols(), b"ACGT");
    assert_eq!(matrix.gap_penalty(), -2);
    assert_eq!(Ok(matrix), MATRIX_TEXT.parse());
}

#[test]
fn missing_matrix_file_reports_the_path() {
    let err = ScoringMatrix::from_filename("/no/such/matrix.txt").unwrap_err();
    assert!(err.to_string().contains("/no/such/matrix.txt"));
}

#[test]
fn wrapped_output_blocks_cover_the_whole_alignment() {
    let matrix: ScoringMatrix = MATRIX_TEXT.parse().unwrap();
    let alignment = nw_alignment(b"GATTACAGATTACA", b"GCATGCAGCATGCA", &matrix).unwrap();

    let wrapped = alignment.wrapped(6).to_string();
    let unwrapped: Vec<u8> = wrapped.bytes().filter(|&b| b != b'\n').collect();

    let mut expected = alignment.reference.clone();
    expected.extend_from_slice(&alignment.query);
    assert_eq!(unwrapped.len(), expected.len());

    // Block order: reference chunk then query chunk, repeated
    let lines: Vec<&str> = wrapped.lines().filter(|l| !l.is_empty()).collect();
    let rebuilt_reference: Vec<u8> = lines.iter().step_by(2).flat_map(|l| l.bytes()).collect();
    assert_eq!(rebuilt_reference, alignment.reference);
}

#[test]
fn alignment_display_is_two_tracks() {
    let alignment = Alignment {
        score:     -4,
        reference: b"A-".to_vec(),
        query:     b"-A".to_vec(),
    };

    assert_eq!(alignment.to_string(), "A-\n-A\n");
}
