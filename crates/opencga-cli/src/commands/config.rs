//! `opencga config` command implementation

use crate::error::Result;
use colored::Colorize;
use opencga_client::config::CONFIG_FILE_ENV;
use opencga_client::ClientConfig;

/// Show the effective configuration, token masked
pub async fn show(config: &ClientConfig) -> Result<()> {
    println!("{}", "OpenCGA Client Configuration:".cyan().bold());
    println!();
    for (key, value) in settings(config) {
        println!("{:<20} {}", format!("{}:", key), value);
    }
    println!();
    println!("{}", "Environment Variables:".cyan());
    println!("  OPENCGA_HOST          - Server host, including the context path");
    println!("  OPENCGA_API_VERSION   - REST API version");
    println!("  OPENCGA_TOKEN         - Authentication token");
    println!("  OPENCGA_TIMEOUT_SECS  - Request timeout in seconds");
    println!("  {:<21} - Configuration file (YAML or JSON)", CONFIG_FILE_ENV);

    Ok(())
}

fn settings(config: &ClientConfig) -> Vec<(&'static str, String)> {
    vec![
        ("host", config.host.clone()),
        ("version", config.version.clone()),
        ("base_url", config.base_url()),
        (
            "token",
            config.masked_token().unwrap_or_else(|| "(not set)".to_string()),
        ),
        ("timeout_secs", config.timeout_secs.to_string()),
        ("camel_case_options", config.camel_case_options.to_string()),
    ]
}
