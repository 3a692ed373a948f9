#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::wildcard_imports,
    clippy::enum_glob_use
)]

/// Alignment functions
pub mod alignment;
/// Data import, export, and manipulation functions.
pub mod data;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::alignment::{Alignment, ScoreTable, nw_alignment, nw_score, nw_score_table, nw_traceback};
    pub use crate::data::{
        ScoringMatrix, SymbolIndexMap,
        err::OrFail,
        fasta::{FastaReader, FastaSeq},
    };
}
