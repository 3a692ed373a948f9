use std::fmt::{self, Display};

#[macro_export]
macro_rules! unwrap_or_return_some_err {
    ($expression:expr) => {
        match $expression {
            Ok(v) => v,
            Err(e) => return Some(Err(e)),
        }
    };
}

/// Trait for specifying getting exit codes from errors.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        1
    }
}

impl GetCode for std::io::Error {
    #[must_use]
    #[inline]
    fn get_code(&self) -> i32 {
        self.raw_os_error().unwrap_or(1)
    }
}

/// Trait for providing more graceful [`expect()`](std::result::Result::expect)
/// behavior but with a status code provided by [`GetCode`].
pub trait OrFail<T> {
    fn unwrap_or_fail(self) -> T;
    fn unwrap_or_die(self, msg: &str) -> T;
}

impl<T, E> OrFail<T> for Result<T, E>
where
    E: GetCode + Display,
{
    fn unwrap_or_fail(self) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(e.get_code());
            }
        }
    }

    fn unwrap_or_die(self, msg: &str) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {msg}\n\n{e}");
                std::process::exit(e.get_code());
            }
        }
    }
}

/// Wraps an error with file-path context while keeping the original error
/// reachable through [`Error::source`](std::error::Error::source).
#[derive(Debug)]
pub(crate) struct WithPathContext<E> {
    pub(crate) context: String,
    pub(crate) source:  E,
}

impl<E: Display> Display for WithPathContext<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.source)
    }
}

impl<E: std::error::Error + 'static> std::error::Error for WithPathContext<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// An enum representing errors that can occur while parsing or constructing a
/// substitution-scoring matrix.
///
/// Row numbers in the variants are 1-based, matching how a user would count
/// lines in the matrix file.
#[derive(Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MatrixFormatError {
    /// No alphabet symbols were found on the first line
    EmptyAlphabet,
    /// An alphabet symbol was declared more than once (after case folding)
    DuplicateSymbol(u8),
    /// An alphabet symbol was not a single graphic ASCII character
    InvalidAlphabetSymbol(String),
    /// Fewer score rows were present than alphabet symbols
    MissingRows { expected: usize, found: usize },
    /// A score row had the wrong number of entries
    RowWidth { row: usize, expected: usize, found: usize },
    /// A score entry could not be parsed as an integer
    InvalidScore { row: usize, entry: String },
    /// The final gap-penalty line was absent
    MissingGapPenalty,
    /// The gap-penalty line was not a single integer
    InvalidGapPenalty(String),
    /// Content remained after the gap-penalty line
    TrailingContent,
    /// The score table's dimensions did not match the alphabet size
    Dimensions { symbols: usize, entries: usize },
}

impl Display for MatrixFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixFormatError::EmptyAlphabet => {
                write!(f, "No alphabet symbols were found on the first line of the matrix!")
            }
            MatrixFormatError::DuplicateSymbol(s) => {
                write!(f, "The alphabet symbol '{}' was declared more than once!", s.escape_ascii())
            }
            MatrixFormatError::InvalidAlphabetSymbol(s) => {
                write!(f, "'{s}' is not a valid single-character alphabet symbol!")
            }
            MatrixFormatError::MissingRows { expected, found } => {
                write!(f, "Expected {expected} matrix rows but only found {found}!")
            }
            MatrixFormatError::RowWidth { row, expected, found } => {
                write!(f, "Matrix row {row} has {found} entries but {expected} were expected!")
            }
            MatrixFormatError::InvalidScore { row, entry } => {
                write!(f, "Could not parse '{entry}' in matrix row {row} as an integer score!")
            }
            MatrixFormatError::MissingGapPenalty => {
                write!(f, "The matrix is missing its final gap penalty line!")
            }
            MatrixFormatError::InvalidGapPenalty(line) => {
                write!(f, "Could not parse '{line}' as a single integer gap penalty!")
            }
            MatrixFormatError::TrailingContent => {
                write!(f, "Unexpected content was found after the gap penalty line!")
            }
            MatrixFormatError::Dimensions { symbols, entries } => {
                write!(
                    f,
                    "A score table with {entries} entries cannot cover an alphabet of {symbols} symbols!"
                )
            }
        }
    }
}

impl fmt::Debug for MatrixFormatError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl std::error::Error for MatrixFormatError {}
impl GetCode for MatrixFormatError {}
