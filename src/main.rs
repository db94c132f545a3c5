use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;

use blockpatch::cli::Cli;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    blockpatch::logging::init_logging(cli.verbose);

    debug!(
        "Starting blockpatch v{} on {}",
        blockpatch::version(),
        std::env::consts::OS
    );

    let mut stdout = std::io::stdout().lock();
    let code = cli.run(&mut stdout)?;

    Ok(ExitCode::from(code))
}
