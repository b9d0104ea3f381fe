//! Command-line interface definition and dispatch for ripe-atlas.
//!
//! Uses [`clap`] for argument parsing with derive macros. Each subcommand is
//! routed to its handler; rc file operations live in the [`configure`]
//! submodule.

mod configure;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

/// Top-level CLI structure for ripe-atlas.
#[derive(Parser)]
#[command(name = "ripe-atlas", about = "Command-line tools for RIPE Atlas")]
pub struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for the ripe-atlas CLI.
///
/// The `///` doc comments on variants double as `--help` text rendered by clap.
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or change the configuration file
    Configure {
        #[command(subcommand)]
        action: ConfigureAction,
    },
}

/// Subcommands for the `configure` command.
///
/// Reads and writes the YAML rc file at `~/.config/ripe-atlas-tools/rc`.
#[derive(Subcommand)]
pub enum ConfigureAction {
    /// Show the merged configuration, or a single key of it
    Show {
        /// Dotted key to show (e.g. specification.types.ping)
        key: Option<String>,
        /// Show the built-in defaults instead of the merged configuration
        #[arg(long)]
        defaults: bool,
    },
    /// Print the path of the rc file
    Path,
    /// Write the built-in defaults to a commented rc file
    Init {
        /// Overwrite an existing rc file
        #[arg(long)]
        force: bool,
    },
    /// Change settings and save them (e.g. authorisation.create=KEY)
    Set {
        /// One or more KEY=VALUE assignments
        #[arg(required = true, value_name = "KEY=VALUE")]
        assignments: Vec<String>,
    },
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Dispatches the parsed CLI command to its handler.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Configure { action } => configure::handle_configure(action),
    }
}
