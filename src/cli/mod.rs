//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod convert;
mod inspect;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// xflconv - Convert XFL-style animation projects to normalized JSON
#[derive(Parser)]
#[command(name = "xflc")]
#[command(about = "xflconv - Convert an XFL-style animation project to a normalized JSON descriptor")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a project directory to a JSON animation descriptor
    Convert {
        /// Input project directory (holds DOMDocument.xml and library/)
        input: Option<PathBuf>,

        /// Output directory for the descriptor and media copy
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to an xfl.toml config file (default: discovered by walking up)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,

        /// Worker pool size for symbol extraction
        #[arg(long, value_parser = clap::value_parser!(usize))]
        jobs: Option<usize>,

        /// Skip copying library/media into the output
        #[arg(long)]
        no_media: bool,

        /// Print per-symbol progress
        #[arg(long)]
        verbose: bool,
    },

    /// Load only the root document and print its header and reference counts
    Inspect {
        /// Input project directory (holds DOMDocument.xml)
        input: Option<PathBuf>,

        /// Path to an xfl.toml config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { input, output, config, pretty, jobs, no_media, verbose } => {
            convert::run_convert(
                input.as_deref(),
                output.as_deref(),
                config.as_deref(),
                pretty,
                jobs,
                no_media,
                verbose,
            )
        }
        Commands::Inspect { input, config } => {
            inspect::run_inspect(input.as_deref(), config.as_deref())
        }
    }
}

/// Load config and apply CLI overrides; prints the error itself on failure.
pub(crate) fn load_with_overrides(
    config_path: Option<&std::path::Path>,
    overrides: crate::config::CliOverrides,
) -> Result<crate::config::Config, ExitCode> {
    let mut config = match crate::config::load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Err(ExitCode::from(EXIT_INVALID_ARGS));
        }
    };
    overrides.apply(&mut config);
    Ok(config)
}
