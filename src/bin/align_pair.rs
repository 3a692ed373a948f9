const PROGRAM: &str = "align_pair";

use needle::{
    alignment::{nw_score_table, nw_traceback},
    data::{
        err::OrFail,
        fasta::{FastaReader, FastaSeq},
        matrices::ScoringMatrix,
    },
};
use std::env;

const WRAP_WIDTH: usize = 80;

fn finish(message: &str) -> ! {
    eprintln!("\n{message}\n");
    std::process::exit(0);
}

fn die(message: &str) -> ! {
    eprintln!("\n{PROGRAM} ERROR! {message}\n");
    std::process::exit(1);
}

fn next_record<R: std::io::Read>(records: &mut FastaReader<R>) -> FastaSeq {
    match records.next() {
        Some(record) => record.unwrap_or_die("Failed to read a FASTA record."),
        None => die("Not enough input sequences!"),
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut show_table = false;
    let mut files = Vec::new();
    for arg in &args[1..] {
        match arg.as_str() {
            "-t" | "--table" => show_table = true,
            file => files.push(file),
        }
    }

    if files.len() != 2 {
        finish(&format!("Usage:\n\t{PROGRAM} <matrix-file> <fasta-file> [-t|--table]"));
    }

    let matrix = ScoringMatrix::from_filename(files[0]).unwrap_or_die("Failed to load the scoring matrix.");

    let mut records = FastaReader::from_filename(files[1]).unwrap_or_die("Failed to open the FASTA file.");
    let first = next_record(&mut records);
    let second = next_record(&mut records);

    let table =
        nw_score_table(&first.sequence, &second.sequence, &matrix).unwrap_or_die("Failed to align the sequences.");

    if show_table {
        println!("{}", table.labeled(&first.sequence, &second.sequence));
    }

    let alignment = nw_traceback(&table, &first.sequence, &second.sequence, &matrix);

    println!("{} aligned to {}", first.name, second.name);
    print!("{}", alignment.wrapped(WRAP_WIDTH));
    println!("Score: {}", alignment.score);
}
