//! `opencga call` command implementation
//!
//! Builds a call for one endpoint from command-line arguments, then either
//! prints the request (`--dry-run`) or sends it and prints the response.

use crate::error::{CliError, Result};
use colored::Colorize;
use opencga_client::types::EventType;
use opencga_client::{ClientConfig, OpenCgaClient, RestResponse};
use serde_json::{json, Value};
use std::path::Path;
use tracing::{debug, info};

/// Parsed arguments of one `opencga call` invocation
#[derive(Debug, Clone, Default)]
pub struct CallArgs {
    pub category: String,
    pub endpoint: String,
    pub args: Vec<(String, String)>,
    pub params: Vec<(String, String)>,
    pub body: Option<String>,
    pub dry_run: bool,
}

/// Call an endpoint and print the server's JSON response
pub async fn run(config: ClientConfig, call_args: CallArgs) -> Result<()> {
    let base_url = config.base_url();
    let client = OpenCgaClient::new(config)?;

    let mut call = client
        .category(&call_args.category)?
        .call(&call_args.endpoint)?;

    for (name, value) in &call_args.args {
        call = call.arg(name.clone(), value.clone());
    }

    for (key, value) in &call_args.params {
        call = call.option(key.clone(), value.clone());
    }

    if let Some(body) = &call_args.body {
        call = call.body(parse_body(body)?);
    }

    if call_args.dry_run {
        let request = call.build()?;
        let preview = json!({
            "method": request.method,
            "url": format!("{}/{}", base_url, request.path),
            "options": request.options,
            "body": request.body,
        });
        println!("{}", serde_json::to_string_pretty(&preview)?);
        return Ok(());
    }

    info!(
        category = %call_args.category,
        endpoint = %call_args.endpoint,
        "Calling OpenCGA endpoint"
    );

    let response = call.send().await?;
    report_events(&response);
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

/// Inline JSON, or `@path` to read the JSON from a file
pub fn parse_body(raw: &str) -> Result<Value> {
    let text = match raw.strip_prefix('@') {
        Some(path) => read_body_file(Path::new(path))?,
        None => raw.to_string(),
    };

    serde_json::from_str(&text).map_err(|e| CliError::invalid_body(e.to_string()))
}

fn read_body_file(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "Reading request body");

    if !path.is_file() {
        return Err(CliError::invalid_argument(format!(
            "body file '{}' does not exist",
            path.display()
        )));
    }

    Ok(std::fs::read_to_string(path)?)
}

/// Warnings and errors carried inside a successful response go to stderr
fn report_events(response: &Value) {
    let Ok(envelope) = RestResponse::from_value(response.clone()) else {
        return;
    };

    for event in envelope.all_events() {
        let message = event.message.as_deref().unwrap_or("(no message)");
        match event.kind {
            EventType::Error => eprintln!("{} {}", "✗".red(), message),
            EventType::Warning => eprintln!("{} {}", "⚠".yellow(), message),
            EventType::Info | EventType::Other => {},
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_inline_body() {
        let body = parse_body(r#"{"id": "FAM1", "members": []}"#).unwrap();
        assert_eq!(body, json!({"id": "FAM1", "members": []}));
    }

    #[test]
    fn test_parse_body_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"comments": [{{"message": "checked"}}]}}"#).unwrap();

        let body = parse_body(&format!("@{}", file.path().display())).unwrap();
        assert_eq!(body["comments"][0]["message"], "checked");
    }

    #[test]
    fn test_invalid_body() {
        assert!(matches!(parse_body("{not json"), Err(CliError::InvalidBody(_))));
        assert!(matches!(
            parse_body("@/definitely/not/here.json"),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn test_dry_run_sends_nothing() {
        // Nothing listens on port 9; a dry run must not try to connect
        let config = ClientConfig::new("http://127.0.0.1:9/opencga");
        let args = CallArgs {
            category: "alignment".to_string(),
            endpoint: "run_stats".to_string(),
            args: vec![("file".to_string(), "f1".to_string())],
            dry_run: true,
            ..Default::default()
        };

        run(config, args).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_argument_fails_before_sending() {
        let config = ClientConfig::new("http://127.0.0.1:9/opencga");
        let args = CallArgs {
            category: "families".to_string(),
            endpoint: "info".to_string(),
            dry_run: true,
            ..Default::default()
        };

        let err = run(config, args).await.unwrap_err();
        assert!(err.to_string().contains("families"));
    }
}
