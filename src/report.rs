use std::path::PathBuf;

/// Prepended to the status line when nothing was written
pub const DRY_RUN_PREFIX: &str = "Dry run: ";

/// What a patch run did to the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The target was found and every occurrence replaced
    Applied { occurrences: usize },
    /// The target was absent; nothing was written
    TargetMissing,
}

/// Summary of a single patch run
#[derive(Debug, Clone)]
pub struct PatchReport {
    pub path: PathBuf,
    pub outcome: PatchOutcome,
    /// True when the substitution was computed but not written
    pub dry_run: bool,
    /// SHA-256 of the content as read
    pub digest_before: String,
    /// SHA-256 of the content as (it would be) written
    pub digest_after: String,
    /// Unified diff of the change, when requested
    pub diff: Option<String>,
    pub success_message: String,
    pub failure_message: String,
}

impl PatchReport {
    pub fn is_applied(&self) -> bool {
        matches!(self.outcome, PatchOutcome::Applied { .. })
    }

    /// Number of replaced occurrences (0 when the target was missing)
    pub fn occurrences(&self) -> usize {
        match self.outcome {
            PatchOutcome::Applied { occurrences } => occurrences,
            PatchOutcome::TargetMissing => 0,
        }
    }

    /// The single status line for this run.
    ///
    /// Dry runs are prefixed so a success line never claims a file changed
    /// when nothing was written.
    pub fn message(&self) -> String {
        let message = match self.outcome {
            PatchOutcome::Applied { .. } => &self.success_message,
            PatchOutcome::TargetMissing => &self.failure_message,
        };
        if self.dry_run {
            format!("{DRY_RUN_PREFIX}{message}")
        } else {
            message.clone()
        }
    }

    /// Process exit code.
    ///
    /// A missing target exits 0 unless `strict` is set, so callers that only
    /// watch the exit status keep seeing success.
    pub fn exit_code(&self, strict: bool) -> u8 {
        match self.outcome {
            PatchOutcome::TargetMissing if strict => 1,
            _ => 0,
        }
    }
}
