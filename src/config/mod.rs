// Patch configuration: the built-in welcome screen patch and TOML manifests

pub mod builtin;
pub mod config_loader;

pub use config_loader::{load_manifest, PatchManifest};

use std::path::PathBuf;

use crate::error::{PatchError, PatchResult};

/// A fully resolved patch: where to apply it, what to swap, what to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchConfig {
    /// File to patch
    pub path: PathBuf,
    /// Exact literal block to search for
    pub target: String,
    /// Literal block written in place of every occurrence of `target`
    pub replacement: String,
    /// Status line when the target was replaced
    pub success_message: String,
    /// Status line when the target was absent
    pub failure_message: String,
}

impl PatchConfig {
    /// Patch with default messages
    pub fn new(
        path: impl Into<PathBuf>,
        target: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            target: target.into(),
            replacement: replacement.into(),
            success_message: builtin::SUCCESS_MESSAGE.to_string(),
            failure_message: builtin::FAILURE_MESSAGE.to_string(),
        }
    }

    /// Override the target path
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Reject patches that cannot be applied meaningfully
    pub fn validate(&self) -> PatchResult<()> {
        if self.target.is_empty() {
            return Err(PatchError::EmptyTarget);
        }
        Ok(())
    }
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self::new(
            builtin::DEFAULT_PATH,
            builtin::TARGET_BLOCK,
            builtin::REPLACEMENT_BLOCK,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_builtin_patch() {
        let config = PatchConfig::default();
        assert_eq!(config.path, PathBuf::from("components/WelcomeScreen.test.tsx"));
        assert!(config.target.contains("PERSONA_PRESETS[0].name.length"));
        assert!(config.replacement.contains("initialGreetingLength"));
        assert_eq!(config.success_message, "Test updated successfully.");
        assert_eq!(config.failure_message, "Could not find the test block to replace.");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builtin_replacement_does_not_contain_target() {
        // Re-running against a patched file must report failure
        assert!(!builtin::REPLACEMENT_BLOCK.contains(builtin::TARGET_BLOCK));
    }

    #[test]
    fn test_empty_target_rejected() {
        let config = PatchConfig::new("a.txt", "", "x");
        assert!(matches!(config.validate(), Err(PatchError::EmptyTarget)));
    }
}
