use crate::{data::err::WithPathContext, unwrap_or_return_some_err};
use std::{
    fs::File,
    io::{BufRead, BufReader, Error as IOError, ErrorKind},
    path::Path,
};

/// Provides a container struct for data from a generic
/// [FASTA](https://en.wikipedia.org/wiki/FASTA_format) file.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FastaSeq {
    pub name:     String,
    pub sequence: Vec<u8>,
}

/// Structure for buffered reading of `FASTA` files.
#[derive(Debug)]
pub struct FastaReader<R: std::io::Read> {
    reader:       BufReader<R>,
    buffer:       Vec<u8>,
    first_record: bool,
}

impl<R: std::io::Read> FastaReader<R> {
    /// Creates an iterator over FASTA data, wrapping the input in a buffered
    /// reader. Empty input yields an empty iterator.
    pub fn new(inner: R) -> Self {
        FastaReader {
            reader:       BufReader::new(inner),
            buffer:       Vec::new(),
            first_record: true,
        }
    }

    fn get_error(msg: &str, header: Option<&str>) -> std::io::Result<FastaSeq> {
        if let Some(header) = header {
            Err(IOError::new(ErrorKind::InvalidData, format!("{msg} See header: {header}")))
        } else {
            Err(IOError::new(ErrorKind::InvalidData, msg))
        }
    }
}

impl FastaReader<File> {
    /// Reads a FASTA file into an iterator backed by a buffered reader.
    ///
    /// ## Errors
    ///
    /// Will return `Err` if the file or permissions do not exist. The file
    /// path is included in the error message and the underlying error is
    /// preserved as the source.
    pub fn from_filename<P>(filename: P) -> std::io::Result<FastaReader<File>>
    where
        P: AsRef<Path>, {
        let path = filename.as_ref();
        match File::open(path) {
            Ok(file) => Ok(FastaReader::new(file)),
            Err(e) => Err(IOError::new(
                e.kind(),
                WithPathContext {
                    context: format!("Couldn't open FASTA file '{}'", path.display()),
                    source:  e,
                },
            )),
        }
    }
}

/// An iterator for buffered reading of
/// [FASTA](https://en.wikipedia.org/wiki/FASTA_format) files.
impl<R: std::io::Read> Iterator for FastaReader<R> {
    type Item = std::io::Result<FastaSeq>;

    fn next(&mut self) -> Option<Self::Item> {
        // Consume everything up to the first '>', which must be the start of
        // the first record. Only whitespace may precede it.
        if self.first_record {
            self.first_record = false;
            self.buffer.clear();

            let bytes = unwrap_or_return_some_err!(self.reader.read_until(b'>', &mut self.buffer));
            if bytes == 0 {
                return None;
            }

            if !self.buffer.ends_with(b">") {
                return Some(if self.buffer.iter().all(u8::is_ascii_whitespace) {
                    Self::get_error("No FASTA data found!", None)
                } else {
                    Self::get_error("The FASTA file must start with a '>' symbol!", None)
                });
            }

            if !self.buffer[..bytes - 1].iter().all(u8::is_ascii_whitespace) {
                return Some(Self::get_error("The FASTA file must start with a '>' symbol!", None));
            }
        }

        // The reader is now positioned just after a record's '>'.
        self.buffer.clear();
        let bytes = unwrap_or_return_some_err!(self.reader.read_until(b'>', &mut self.buffer));
        if bytes == 0 {
            return None;
        }

        if self.buffer.ends_with(b">") {
            self.buffer.pop();

            // The next record's '>' must begin a new line
            if !matches!(self.buffer.last(), Some(b'\n' | b'\r')) {
                return Some(Self::get_error(
                    "FASTA records must start with the '>' symbol on a newline, and no other '>' symbols can occur in a record!",
                    None,
                ));
            }
        }

        let mut lines = self.buffer.split(|&b| b == b'\n' || b == b'\r');

        let name = match lines.next() {
            Some(header) => String::from_utf8_lossy(header.trim_ascii()).into_owned(),
            None => String::new(),
        };
        if name.is_empty() {
            return Some(Self::get_error("Missing FASTA header!", None));
        }

        let sequence: Vec<u8> = lines.flat_map(|line| line.trim_ascii().iter().copied()).collect();
        if sequence.is_empty() {
            return Some(Self::get_error("Missing FASTA sequence!", Some(&name)));
        }

        Some(Ok(FastaSeq { name, sequence }))
    }
}

impl std::fmt::Display for FastaSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, ">{}\n{}\n", self.name, String::from_utf8_lossy(&self.sequence))
    }
}
