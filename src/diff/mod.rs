pub mod preview;
pub mod search_replace;

pub use preview::{line_stats, unified_diff};
pub use search_replace::{count_occurrences, replace_all, Substitution};
