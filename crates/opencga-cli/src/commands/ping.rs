//! `opencga ping` command implementation

use crate::error::{CliError, Result};
use colored::Colorize;
use opencga_client::{ClientConfig, OpenCgaClient};

/// Check that the server answers `meta/ping`
pub async fn run(config: ClientConfig) -> Result<()> {
    let host = config.host.clone();
    let client = OpenCgaClient::new(config)?;

    if !client.ping().await? {
        return Err(CliError::Unreachable(host));
    }

    println!("{} OpenCGA server at {} is reachable", "✓".green(), host);
    Ok(())
}
