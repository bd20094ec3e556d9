//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Single-session stopwatch with a markdown stint log.
///
/// Run without a subcommand to open an interactive timer session; each
/// completed session is recorded at the top of the log document.
#[derive(Debug, Parser)]
#[command(name = "stint", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the current local time as `h:mm AM/PM`.
    ///
    /// Independent of the timer; useful for pasting timestamps into notes.
    Now,
}
