//! Error types for the OpenCGA client
//!
//! Messages are written for the person running the code: they say what went
//! wrong and what to check next.

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Error type for every client operation
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request could not be sent or its response could not be read
    #[error("Network request failed: {0}. Check the OpenCGA host URL and your connection.")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("OpenCGA server returned HTTP {status}: {message}")]
    Server { status: u16, message: String },

    /// JSON encoding or decoding failed
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be parsed
    #[error("Failed to parse client configuration: {0}. Check the file syntax at the indicated line/column.")]
    Yaml(#[from] serde_yaml::Error),

    /// File system operation failed
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your OPENCGA_* environment variables or config file.")]
    Config(String),

    /// No category registered under this key
    #[error("Unknown category '{0}'. Run 'opencga endpoints' to list the available categories.")]
    UnknownCategory(String),

    /// The category does not declare this endpoint
    #[error("Unknown endpoint '{endpoint}' in category '{category}'. Run 'opencga endpoints {category}' to list its endpoints.")]
    UnknownEndpoint { category: String, endpoint: String },

    /// A required identifier or body was not supplied
    #[error("Missing required argument '{argument}' for endpoint '{endpoint}'")]
    MissingArgument { endpoint: String, argument: String },
}

impl ClientError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a server error
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Create a missing argument error
    pub fn missing_argument(endpoint: impl Into<String>, argument: impl Into<String>) -> Self {
        Self::MissingArgument {
            endpoint: endpoint.into(),
            argument: argument.into(),
        }
    }

    /// HTTP status of a server error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
