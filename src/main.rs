//! Entry point for `ripe-atlas`, the RIPE Atlas command-line tools.
//!
//! This binary parses CLI arguments via [`cli`], sets up logging, and
//! dispatches to the appropriate subcommand handler.

mod cli;
mod config;
mod constants;
mod logging;

use anyhow::Result;

/// Runs the ripe-atlas CLI.
///
/// Parses command-line arguments into a [`cli::Cli`] struct, installs the
/// log subscriber at the requested verbosity, and dispatches the chosen
/// subcommand via [`cli::run`].
fn main() -> Result<()> {
    let cli = cli::parse();
    logging::init_logging(cli.verbose)?;
    cli::run(cli)
}
