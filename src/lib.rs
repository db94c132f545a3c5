// blockpatch - replaces an exact literal block inside a source file
// Single-shot: read, check for the block, substitute, write back, report

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod file;
pub mod logging;
pub mod report;

pub use config::PatchConfig;
pub use error::{PatchError, PatchResult};
pub use file::TextPatcher;
pub use report::{PatchOutcome, PatchReport};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
