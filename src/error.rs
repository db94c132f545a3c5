use std::path::PathBuf;
use thiserror::Error;

/// Main error type for blockpatch
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("IO error: {source}{}", path_suffix(.path))]
    Io {
        source: std::io::Error,
        path: Option<PathBuf>,
    },

    #[error("Invalid patch manifest {}: {message}", .path.display())]
    Config { message: String, path: PathBuf },

    #[error("Target block is empty")]
    EmptyTarget,
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" (path: {})", path.display()),
        None => String::new(),
    }
}

impl PatchError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: Option<impl Into<PathBuf>>) -> Self {
        Self::Io {
            source: err,
            path: path.map(|p| p.into()),
        }
    }

    /// Create a new manifest error
    pub fn config_error(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Whether this error came from a missing file
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

impl From<std::io::Error> for PatchError {
    fn from(error: std::io::Error) -> Self {
        PatchError::io_error(error, None::<PathBuf>)
    }
}

/// Result type alias using PatchError
pub type PatchResult<T> = Result<T, PatchError>;

/// Contextual error mapping function
pub fn map_io_err<P: Into<PathBuf>>(path: P) -> impl FnOnce(std::io::Error) -> PatchError {
    let path = path.into();
    move |err| PatchError::io_error(err, Some(path))
}
