use tracing::{debug, enabled, info, warn, Level};

use crate::config::PatchConfig;
use crate::diff::{line_stats, replace_all, unified_diff};
use crate::error::PatchResult;
use crate::file::operations::{content_digest, read_file_to_string, write_file_truncating};
use crate::report::{PatchOutcome, PatchReport};

/// Applies one literal block substitution to one file.
///
/// The file is read once, the new content is built entirely in memory, and
/// only then is the file rewritten. A missing target never touches the disk.
#[derive(Debug, Clone)]
pub struct TextPatcher {
    config: PatchConfig,
    dry_run: bool,
    with_diff: bool,
}

impl TextPatcher {
    pub fn new(config: PatchConfig) -> Self {
        Self {
            config,
            dry_run: false,
            with_diff: false,
        }
    }

    /// Compute the outcome without writing
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Attach a unified diff of the change to the report
    pub fn with_diff(mut self, with_diff: bool) -> Self {
        self.with_diff = with_diff;
        self
    }

    /// Run the patch.
    ///
    /// I/O failures (missing, unreadable or unwritable file) are returned as
    /// errors. An absent target is not an error: it yields a report with
    /// `PatchOutcome::TargetMissing`.
    pub fn run(&self) -> PatchResult<PatchReport> {
        self.config.validate()?;
        let path = &self.config.path;

        let content = read_file_to_string(path)?;
        let digest_before = content_digest(&content);

        let Some(substitution) =
            replace_all(&content, &self.config.target, &self.config.replacement)
        else {
            warn!("Target block not found in {}", path.display());
            let digest_after = digest_before.clone();
            return Ok(self.report(PatchOutcome::TargetMissing, digest_before, digest_after, None));
        };

        if enabled!(Level::DEBUG) {
            let (inserted, deleted) = line_stats(&content, &substitution.content);
            debug!(
                "{}: {} occurrence(s), +{} -{} lines",
                path.display(),
                substitution.occurrences,
                inserted,
                deleted
            );
        }

        let diff = self
            .with_diff
            .then(|| unified_diff(path, &content, &substitution.content));

        if self.dry_run {
            info!("Dry run: leaving {} untouched", path.display());
        } else {
            write_file_truncating(path, &substitution.content)?;
            info!(
                "Patched {} ({} occurrence(s))",
                path.display(),
                substitution.occurrences
            );
        }

        Ok(self.report(
            PatchOutcome::Applied {
                occurrences: substitution.occurrences,
            },
            digest_before,
            content_digest(&substitution.content),
            diff,
        ))
    }

    fn report(
        &self,
        outcome: PatchOutcome,
        digest_before: String,
        digest_after: String,
        diff: Option<String>,
    ) -> PatchReport {
        PatchReport {
            path: self.config.path.clone(),
            outcome,
            dry_run: self.dry_run,
            digest_before,
            digest_after,
            diff,
            success_message: self.config.success_message.clone(),
            failure_message: self.config.failure_message.clone(),
        }
    }
}
