use needle::data::fasta::{FastaReader, FastaSeq};

#[test]
fn reads_records_from_bytes() {
    let data: &[u8] = b">s1\nGATTACA\n>s2\nGCAT\nGCA\n";
    let records: Vec<FastaSeq> = FastaReader::new(data).map(Result::unwrap).collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "s1");
    assert_eq!(records[0].sequence, b"GATTACA");
    assert_eq!(records[1].sequence, b"GCATGCA");
}

#[test]
fn display_round_trips_a_record() {
    let record = FastaSeq {
        name:     "s1".to_string(),
        sequence: b"atgc".to_vec(),
    };

    assert_eq!(record.to_string(), ">s1\natgc\n");
}

#[test]
fn missing_file_reports_the_path() {
    let err = FastaReader::from_filename("/no/such/file.fasta").unwrap_err();
    assert!(err.to_string().contains("/no/such/file.fasta"));
}
