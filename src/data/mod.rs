//! ## Data import, export, and manipulation functions.
//!
//! ## IO Errors in *Needle*
//!
//! As a library, *Needle* aims to avoid making assumptions on the style of
//! error handling chosen by users, in particular by not adopting any error
//! handling crate as a dependency.
//!
//! For specific applications, *Needle* has enum-style error types such as
//! [`MatrixFormatError`] or [`AlignmentError`], which the user can match on or
//! display. For working with files and record types, however, *Needle* elects
//! to use [`std::io::Error`], allowing for system IO errors to be propagated
//! and function-specific error messages to be represented with
//! [`ErrorKind::InvalidData`].
//!
//! IO failures are assumed to be rare, and hence the crate will automatically
//! add the file path to the error messages (such as in
//! [`FastaReader::from_filename`] or [`ScoringMatrix::from_filename`]). When
//! context is added to an error message, the original error is stored so that
//! it remains accessible using [`Error::source`]. The [`OrFail`] trait offers
//! [`unwrap_or_fail`] and [`unwrap_or_die`], which include this information
//! when unwrapping an error in a binary.
//!
//! [`MatrixFormatError`]: err::MatrixFormatError
//! [`AlignmentError`]: crate::alignment::AlignmentError
//! [`ErrorKind::InvalidData`]: std::io::ErrorKind::InvalidData
//! [`FastaReader::from_filename`]: fasta::FastaReader::from_filename
//! [`ScoringMatrix::from_filename`]: matrices::ScoringMatrix::from_filename
//! [`Error::source`]: std::error::Error::source
//! [`OrFail`]: err::OrFail
//! [`unwrap_or_fail`]: err::OrFail::unwrap_or_fail
//! [`unwrap_or_die`]: err::OrFail::unwrap_or_die

/// A module with error types and convenience traits for handling [`Result`].
pub mod err;
/// A module for reading FASTA sequence records.
pub mod fasta;
/// A module for mapping alphabet symbols to dense indices.
pub mod mappings;
/// A module for substitution-scoring matrices.
pub mod matrices;

pub use mappings::SymbolIndexMap;
pub use matrices::ScoringMatrix;
