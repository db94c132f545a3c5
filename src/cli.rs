use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::{load_manifest, PatchConfig};
use crate::file::TextPatcher;

/// Replace an exact literal block inside a file.
///
/// With no arguments, rewrites the character count test in
/// components/WelcomeScreen.test.tsx.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File to patch (overrides the built-in path and the manifest's `path`)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// TOML manifest describing the target and replacement blocks
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Compute the outcome without writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Print a unified diff of the change before the status line
    #[arg(long)]
    pub diff: bool,

    /// Exit with status 1 when the target block is not found
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the patch to apply from the built-in defaults, the manifest
    /// and `--file`, in that order of precedence.
    pub fn patch_config(&self) -> Result<PatchConfig> {
        let config = match &self.manifest {
            Some(manifest) => load_manifest(manifest)
                .with_context(|| format!("Failed to load manifest {}", manifest.display()))?,
            None => PatchConfig::default(),
        };

        Ok(match &self.file {
            Some(file) => config.with_path(file),
            None => config,
        })
    }

    /// Apply the patch, write the diff and status line to `out`, and return
    /// the process exit code.
    pub fn run(&self, out: &mut impl Write) -> Result<u8> {
        let config = self.patch_config()?;
        let path = config.path.clone();
        debug!("Patching {}", path.display());

        let report = TextPatcher::new(config)
            .dry_run(self.dry_run)
            .with_diff(self.diff)
            .run()
            .with_context(|| format!("Failed to patch {}", path.display()))?;

        info!(
            "{}: {} occurrence(s) replaced{}, sha256 {} -> {}",
            report.path.display(),
            report.occurrences(),
            if report.dry_run { " (dry run, not written)" } else { "" },
            report.digest_before,
            report.digest_after
        );

        if let Some(diff) = &report.diff {
            write!(out, "{diff}")?;
        }
        writeln!(out, "{}", report.message())?;

        Ok(report.exit_code(self.strict))
    }
}
