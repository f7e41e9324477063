//! CLI module for gridserve
//!
//! Provides the command-line interface:
//! - serve: boot the HTTP grid server
//! - query: one-shot page query from stdin JSON to stdout JSON

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{query, run, run_command, serve, Config};
pub use errors::{CliError, CliResult};
pub use io::{read_request, write_error, write_response};
