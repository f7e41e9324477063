//! CLI command implementations
//!
//! `serve` loads the config and data, then blocks on the HTTP server.
//! `query` answers exactly one grid request read from stdin, using the same
//! request path the HTTP handler uses.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::grid::MAX_PAGE_LENGTH;
use crate::http_server::{page_response, GridState, HttpServer, HttpServerConfig};
use crate::observability::Logger;
use crate::people::{self, Person};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_error, write_response};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Optional JSON file holding the people data (array of rows);
    /// the built-in sample set is used when absent
    #[serde(default)]
    pub data_file: Option<String>,

    /// HTTP server settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Largest page a caller may request
    #[serde(default = "default_max_page_length")]
    pub max_page_length: usize,
}

fn default_max_page_length() -> usize {
    MAX_PAGE_LENGTH
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.max_page_length == 0 {
            return Err(CliError::config_error("max_page_length must be > 0"));
        }

        Ok(())
    }
}

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}

/// Dispatch a parsed command
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Serve { config } => serve(&config),
        Command::Query { config } => query(&config),
    }
}

/// Boot the HTTP server and block until it exits
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let people = load_people(&config)?;

    Logger::info(
        "BOOT",
        &[
            ("config", &config_path.display().to_string()),
            ("people", &people.len().to_string()),
        ],
    );

    let state = GridState::new(people, config.max_page_length);
    let server = HttpServer::with_config(config.http, state);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::server_error(format!("Failed to start runtime: {}", e)))?;

    runtime
        .block_on(server.start())
        .map_err(|e| CliError::server_error(format!("Server failed: {}", e)))
}

/// Answer one grid request from stdin
pub fn query(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let people = load_people(&config)?;
    let state = GridState::new(people, config.max_page_length);

    let request = read_request()?;
    let params = request_params(&request)?;

    match page_response(&state, &params) {
        Ok(response) => write_response(&response),
        Err(e) => {
            write_error("GRID_STORE_ERROR", &e.to_string())?;
            Err(CliError::server_error(e.to_string()))
        }
    }
}

/// Load the people data named by the config, or the built-in sample set
fn load_people(config: &Config) -> CliResult<Vec<Person>> {
    match &config.data_file {
        None => Ok(people::sample_people()),
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| CliError::data_error(format!("Failed to read data file: {}", e)))?;

            serde_json::from_str(&content)
                .map_err(|e| CliError::data_error(format!("Invalid data JSON: {}", e)))
        }
    }
}

/// Flattens a JSON request object into the wire's string parameter map.
///
/// The one-shot command accepts the same keys as the HTTP query string
/// (`draw`, `start`, `length`, `order[0][column]`, `order[0][dir]`,
/// `search[value]`); scalar values may be JSON numbers or strings.
fn request_params(request: &Value) -> CliResult<HashMap<String, String>> {
    let object = request
        .as_object()
        .ok_or_else(|| CliError::io_error("Request must be a JSON object"))?;

    let mut params = HashMap::new();
    for (key, value) in object {
        let rendered = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => {
                return Err(CliError::io_error(format!(
                    "Unsupported value for parameter '{}'",
                    key
                )))
            }
        };
        params.insert(key.clone(), rendered);
    }

    Ok(params)
}
