//! CLI argument definitions using clap
//!
//! Commands:
//! - gridserve serve --config <path>
//! - gridserve query --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gridserve - a server-side paging engine for grid UIs
#[derive(Parser, Debug)]
#[command(name = "gridserve")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the grid HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./gridserve.json")]
        config: PathBuf,
    },

    /// Execute a single page query from stdin and exit
    Query {
        /// Path to configuration file
        #[arg(long, default_value = "./gridserve.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
