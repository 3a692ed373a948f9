mod alignment;
mod score_table;

pub use alignment::*;
pub use score_table::*;
