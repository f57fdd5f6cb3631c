//! Command-line interface definitions.

use clap::{ColorChoice, Parser};

/// Generate the homepage RSS and Atom feeds.
///
/// Output paths are read from RSS_OUTPUT_PATH and ATOM_OUTPUT_PATH; a format
/// whose variable is unset or empty is skipped.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
