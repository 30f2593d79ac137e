//! OpenCGA CLI Library
//!
//! Command-line front end for the OpenCGA REST client.
//!
//! # Overview
//!
//! - **Discovery**: list categories and their endpoints (`opencga endpoints`)
//! - **Calls**: invoke any endpoint with identifiers, options and a JSON body
//!   (`opencga call`)
//! - **Health**: check that the server answers (`opencga ping`)
//! - **Configuration**: show the effective connection settings
//!   (`opencga config show`)

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod commands;
pub mod error;

// Re-export commonly used types
pub use error::{CliError, Result};

use clap::{Parser, Subcommand};
use opencga_client::ClientConfig;
use std::path::PathBuf;

/// OpenCGA - command-line client for the OpenCGA web services
#[derive(Parser, Debug)]
#[command(name = "opencga")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// OpenCGA host, including the context path
    #[arg(long, env = "OPENCGA_HOST", global = true)]
    pub host: Option<String>,

    /// REST API version
    #[arg(long, env = "OPENCGA_API_VERSION", global = true)]
    pub api_version: Option<String>,

    /// Authentication token
    #[arg(long, env = "OPENCGA_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Client configuration file (YAML or JSON)
    #[arg(long, env = "OPENCGA_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Print the command reference as Markdown
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List categories, or the endpoints of one category
    Endpoints {
        /// Category key or URL path (e.g., "clinical" or "analysis/clinical")
        category: Option<String>,
    },

    /// Call an endpoint
    Call {
        /// Category key or URL path
        category: String,

        /// Endpoint name (e.g., "run_stats")
        endpoint: String,

        /// Identifier or required parameter, NAME=VALUE (repeatable)
        #[arg(short, long = "arg", value_name = "NAME=VALUE", value_parser = parse_key_value)]
        args: Vec<(String, String)>,

        /// Query option, KEY=VALUE (repeatable)
        #[arg(short, long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        params: Vec<(String, String)>,

        /// JSON request body, or @FILE to read it from a file
        #[arg(short, long)]
        body: Option<String>,

        /// Print the request instead of sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// Check that the server is reachable
    Ping,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
}

impl Cli {
    /// Effective client configuration: file and environment, then flags
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = ClientConfig::load(self.config.as_deref())?;

        if let Some(host) = &self.host {
            config = config.with_host(host.clone());
        }

        if let Some(version) = &self.api_version {
            config = config.with_version(version.clone());
        }

        if let Some(token) = self.token.as_ref().filter(|t| !t.is_empty()) {
            config = config.with_token(token.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

/// Parse a `NAME=VALUE` pair; the value may itself contain `=`
fn parse_key_value(s: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", s))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing name in '{}'", s));
    }

    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("study=user@p1:s1").unwrap(),
            ("study".to_string(), "user@p1:s1".to_string())
        );
        assert_eq!(
            parse_key_value("query=a=b").unwrap(),
            ("query".to_string(), "a=b".to_string())
        );
        assert_eq!(parse_key_value("empty=").unwrap().1, "");
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=x").is_err());
    }

    #[test]
    fn test_parse_call() {
        let cli = Cli::try_parse_from([
            "opencga",
            "call",
            "families",
            "info",
            "--arg",
            "families=FAM1,FAM2",
            "-p",
            "study=s1",
            "--dry-run",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Call {
                category,
                endpoint,
                args,
                params,
                body,
                dry_run,
            }) => {
                assert_eq!(category, "families");
                assert_eq!(endpoint, "info");
                assert_eq!(args, vec![("families".to_string(), "FAM1,FAM2".to_string())]);
                assert_eq!(params, vec![("study".to_string(), "s1".to_string())]);
                assert!(body.is_none());
                assert!(dry_run);
            },
            other => panic!("Expected call command, got {:?}", other),
        }
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "opencga",
            "--host",
            "https://ws.example.org/opencga/",
            "--api-version",
            "v3",
            "--token",
            "abc",
            "ping",
        ])
        .unwrap();

        let config = cli.client_config().unwrap();
        assert_eq!(config.host, "https://ws.example.org/opencga");
        assert_eq!(config.version, "v3");
        assert_eq!(config.token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_invalid_host_rejected() {
        let cli = Cli::try_parse_from(["opencga", "--host", "ftp://nowhere", "ping"]).unwrap();
        assert!(cli.client_config().is_err());
    }
}
