//! ## Functions for aligning sequence data.
//!
//! *Needle* provides global pairwise alignment for DNA, protein, or any
//! other sequence data over a runtime scoring matrix.
//!
//! - [Needleman-Wunsch]: Optimal global alignment in the [`nw`] module, with
//!   score-only ([`nw_score`]) and full-alignment ([`nw_alignment`], or
//!   [`nw_score_table`] plus [`nw_traceback`]) entry points.
//!
//! [Needleman-Wunsch]: https://en.wikipedia.org/wiki/Needleman%E2%80%93Wunsch_algorithm

pub mod nw;

mod errors;
mod types;

pub use errors::*;
pub use nw::*;
pub use types::*;
