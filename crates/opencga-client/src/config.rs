//! Client configuration
//!
//! Where to find the OpenCGA server and how to talk to it. Values are layered,
//! lowest precedence first: defaults, a YAML/JSON file, `OPENCGA_*`
//! environment variables, then whatever the caller sets explicitly.

use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

// ============================================================================
// Client Configuration Constants
// ============================================================================

/// Default OpenCGA host when none is configured
pub const DEFAULT_HOST: &str = "http://localhost:8080/opencga";

/// Default REST API version
pub const DEFAULT_API_VERSION: &str = "v2";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 90;

/// Environment variable naming a configuration file
pub const CONFIG_FILE_ENV: &str = "OPENCGA_CONFIG";

/// Connection settings shared by every resource client
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    /// Server root, including any context path (`https://host/opencga`)
    pub host: String,

    /// REST API version segment
    pub version: String,

    /// Authentication token sent as a bearer header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    pub timeout_secs: u64,

    /// Convert snake_case option keys to camelCase before sending
    pub camel_case_options: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            version: DEFAULT_API_VERSION.to_string(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            camel_case_options: true,
        }
    }
}

// Keep tokens out of debug logs
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("version", &self.version)
            .field("token", &self.masked_token())
            .field("timeout_secs", &self.timeout_secs)
            .field("camel_case_options", &self.camel_case_options)
            .finish()
    }
}

impl ClientConfig {
    /// Default configuration pointing at `host`
    pub fn new(host: impl Into<String>) -> Self {
        Self::default().with_host(host)
    }

    /// Read a YAML (or JSON) configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ClientError::config(format!("cannot read '{}': {}", path.display(), e))
        })?;

        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config.normalized())
    }

    /// Defaults overridden by the environment
    pub fn from_env() -> Result<Self> {
        Self::default().merge_env()
    }

    /// Load the full stack: optional file (explicit path or `OPENCGA_CONFIG`),
    /// then environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => match std::env::var(CONFIG_FILE_ENV) {
                Ok(env_path) if !env_path.is_empty() => Self::from_file(env_path)?,
                _ => Self::default(),
            },
        };

        base.merge_env()
    }

    /// Override fields with `OPENCGA_HOST`, `OPENCGA_API_VERSION`,
    /// `OPENCGA_TOKEN` and `OPENCGA_TIMEOUT_SECS` when set
    pub fn merge_env(mut self) -> Result<Self> {
        if let Ok(host) = std::env::var("OPENCGA_HOST") {
            self = self.with_host(host);
        }

        if let Ok(version) = std::env::var("OPENCGA_API_VERSION") {
            self.version = version;
        }

        if let Ok(token) = std::env::var("OPENCGA_TOKEN") {
            self.token = Some(token).filter(|t| !t.is_empty());
        }

        if let Ok(timeout) = std::env::var("OPENCGA_TIMEOUT_SECS") {
            self.timeout_secs = timeout.parse().map_err(|_| {
                ClientError::config(format!(
                    "OPENCGA_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    timeout
                ))
            })?;
        }

        Ok(self)
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self.normalized()
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_camel_case_options(mut self, enabled: bool) -> Self {
        self.camel_case_options = enabled;
        self
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.host.trim().trim_end_matches('/');
        if trimmed.len() != self.host.len() {
            self.host = trimmed.to_string();
        }
        self
    }

    /// Check the settings before any request is made
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(ClientError::config("host is empty"));
        }

        if !(self.host.starts_with("http://") || self.host.starts_with("https://")) {
            return Err(ClientError::config(format!(
                "host '{}' must start with http:// or https://",
                self.host
            )));
        }

        if self.version.trim().is_empty() {
            return Err(ClientError::config("API version is empty"));
        }

        if self.timeout_secs == 0 {
            return Err(ClientError::config("timeout must be at least one second"));
        }

        Ok(())
    }

    /// Root of every request URL: `{host}/webservices/rest/{version}`
    pub fn base_url(&self) -> String {
        format!("{}/webservices/rest/{}", self.host, self.version)
    }

    /// Token reduced to its first four characters, for display
    pub fn masked_token(&self) -> Option<String> {
        self.token.as_ref().map(|token| {
            let visible: String = token.chars().take(4).collect();
            format!("{}****", visible)
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        for var in [
            "OPENCGA_HOST",
            "OPENCGA_API_VERSION",
            "OPENCGA_TOKEN",
            "OPENCGA_TIMEOUT_SECS",
            CONFIG_FILE_ENV,
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.version, "v2");
        assert!(config.token.is_none());
        assert!(config.camel_case_options);
        assert_eq!(
            config.base_url(),
            "http://localhost:8080/opencga/webservices/rest/v2"
        );
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let config = ClientConfig::new("https://ws.example.org/opencga//");
        assert_eq!(config.host, "https://ws.example.org/opencga");
    }

    #[test]
    fn test_validate() {
        assert!(ClientConfig::default().validate().is_ok());
        assert!(ClientConfig::new("").validate().is_err());
        assert!(ClientConfig::new("localhost:8080").validate().is_err());
        assert!(ClientConfig::default().with_version(" ").validate().is_err());
        assert!(ClientConfig::default().with_timeout_secs(0).validate().is_err());
    }

    #[test]
    fn test_masked_token_and_debug() {
        let config = ClientConfig::default().with_token("eyJhbGciOiJIUzI1NiJ9.secret");
        assert_eq!(config.masked_token().as_deref(), Some("eyJh****"));

        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "host: https://demo.example.org/opencga/\nversion: v2\ntimeoutSecs: 30\ncamelCaseOptions: false"
        )
        .unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.host, "https://demo.example.org/opencga");
        assert_eq!(config.timeout_secs, 30);
        assert!(!config.camel_case_options);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_from_missing_file() {
        let err = ClientConfig::from_file("/nonexistent/opencga.yml").unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{{\"host\": \"http://file.example.org\", \"token\": \"file-token\"}}").unwrap();

        std::env::set_var(CONFIG_FILE_ENV, file.path());
        std::env::set_var("OPENCGA_TOKEN", "env-token");

        let config = ClientConfig::load(None).unwrap();
        assert_eq!(config.host, "http://file.example.org");
        assert_eq!(config.token.as_deref(), Some("env-token"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_bad_timeout_env() {
        clear_env();
        std::env::set_var("OPENCGA_TIMEOUT_SECS", "soon");

        let err = ClientConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("OPENCGA_TIMEOUT_SECS"));

        clear_env();
    }
}
