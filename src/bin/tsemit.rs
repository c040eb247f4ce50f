use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use tsemit::cli::args::CliArgs;
use tsemit::cli::driver;

fn main() -> Result<()> {
    // Initialize tracing if TSEMIT_LOG or RUST_LOG is set (zero cost otherwise).
    // Supports TSEMIT_LOG_FORMAT=tree|json|text (see src/tracing_config.rs).
    tsemit::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let output = driver::run(&args)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("failed to write to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}
