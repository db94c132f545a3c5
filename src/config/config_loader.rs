use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{builtin, PatchConfig};
use crate::error::{map_io_err, PatchError, PatchResult};

/// On-disk description of a patch.
///
/// Blocks can be given inline or as files next to the manifest. Relative
/// `path`s are kept as written and resolved against the working directory,
/// like the built-in patch.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PatchManifest {
    /// File to patch
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Inline target block
    #[serde(default)]
    pub target: Option<String>,

    /// Target block read from a file, relative to the manifest
    #[serde(default)]
    pub target_file: Option<PathBuf>,

    /// Inline replacement block
    #[serde(default)]
    pub replacement: Option<String>,

    /// Replacement block read from a file, relative to the manifest
    #[serde(default)]
    pub replacement_file: Option<PathBuf>,

    #[serde(default)]
    pub success_message: Option<String>,

    #[serde(default)]
    pub failure_message: Option<String>,
}

impl PatchManifest {
    /// Parse a manifest from TOML text
    pub fn from_toml(text: &str, origin: &Path) -> PatchResult<Self> {
        toml::from_str(text).map_err(|e| PatchError::config_error(e.to_string(), origin))
    }

    /// Resolve blocks and defaults into a `PatchConfig`.
    ///
    /// `base_dir` anchors `target_file` and `replacement_file`.
    pub fn resolve(self, origin: &Path, base_dir: &Path) -> PatchResult<PatchConfig> {
        let target = resolve_block(
            "target",
            self.target,
            self.target_file.as_deref(),
            origin,
            base_dir,
        )?;
        let replacement = resolve_block(
            "replacement",
            self.replacement,
            self.replacement_file.as_deref(),
            origin,
            base_dir,
        )?;

        let config = PatchConfig {
            path: self
                .path
                .unwrap_or_else(|| PathBuf::from(builtin::DEFAULT_PATH)),
            target,
            replacement,
            success_message: self
                .success_message
                .unwrap_or_else(|| builtin::SUCCESS_MESSAGE.to_string()),
            failure_message: self
                .failure_message
                .unwrap_or_else(|| builtin::FAILURE_MESSAGE.to_string()),
        };
        config.validate()?;
        Ok(config)
    }
}

fn resolve_block(
    name: &str,
    inline: Option<String>,
    file: Option<&Path>,
    origin: &Path,
    base_dir: &Path,
) -> PatchResult<String> {
    match (inline, file) {
        (Some(text), None) => Ok(text),
        (None, Some(file)) => {
            let path = base_dir.join(file);
            debug!("Reading {} block from {}", name, path.display());
            fs::read_to_string(&path).map_err(map_io_err(path))
        }
        (Some(_), Some(_)) => Err(PatchError::config_error(
            format!("`{name}` and `{name}_file` are mutually exclusive"),
            origin,
        )),
        (None, None) => Err(PatchError::config_error(
            format!("one of `{name}` or `{name}_file` is required"),
            origin,
        )),
    }
}

/// Load and resolve a patch manifest from disk
pub fn load_manifest(manifest_path: &Path) -> PatchResult<PatchConfig> {
    debug!("Loading patch manifest: {}", manifest_path.display());
    let text = fs::read_to_string(manifest_path).map_err(map_io_err(manifest_path))?;
    let manifest = PatchManifest::from_toml(&text, manifest_path)?;
    let base_dir = manifest_path.parent().unwrap_or_else(|| Path::new("."));
    manifest.resolve(manifest_path, base_dir)
}
