use std::io::IsTerminal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "warn";

/// Filter used by `--verbose` when `RUST_LOG` is not set
const VERBOSE_FILTER: &str = "blockpatch=debug";

/// Initialize logging on stderr.
///
/// Stdout is reserved for the status line (and the optional diff), so the
/// subscriber always writes to stderr. `RUST_LOG` wins over `verbose`.
/// Calling this more than once is harmless.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let result = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(filter)
        .with_target(verbose)
        .without_time()
        .try_init();

    if result.is_ok() {
        debug!("Logging initialized for blockpatch v{}", crate::version());
    }
}
