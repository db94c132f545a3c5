use sha2::{Digest, Sha256};
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

use crate::error::{map_io_err, PatchResult};

/// Read a whole file as text.
///
/// The handle lives only for the duration of the read. Content that is not
/// valid UTF-8 surfaces as an `InvalidData` I/O error.
pub fn read_file_to_string(path: &Path) -> PatchResult<String> {
    debug!("Reading file: {}", path.display());

    let content = {
        let mut file = File::open(path).map_err(map_io_err(path))?;
        let mut content = String::new();
        file.read_to_string(&mut content).map_err(map_io_err(path))?;
        content
    };

    debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Overwrite a file with `content`, truncating whatever was there.
///
/// The caller computes the full content up front; this only opens, writes
/// and flushes.
pub fn write_file_truncating(path: &Path, content: &str) -> PatchResult<()> {
    debug!("Writing {} bytes to {}", content.len(), path.display());

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(map_io_err(path))?;
    file.write_all(content.as_bytes()).map_err(map_io_err(path))?;
    file.flush().map_err(map_io_err(path))?;

    Ok(())
}

/// Calculate a hex SHA-256 hash for a string
pub fn content_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
