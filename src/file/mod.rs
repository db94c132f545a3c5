pub mod operations;
pub mod patcher;

pub use operations::{content_digest, read_file_to_string, write_file_truncating};
pub use patcher::TextPatcher;
