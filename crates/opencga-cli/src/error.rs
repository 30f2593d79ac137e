//! Error types for the OpenCGA CLI

use opencga_client::ClientError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors reported to the person at the terminal
#[derive(Error, Debug)]
pub enum CliError {
    /// Anything the client library raised
    #[error(transparent)]
    Client(#[from] ClientError),

    /// A command-line value could not be understood
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The request body is not valid JSON
    #[error("Invalid JSON body: {0}. Pass inline JSON or @path/to/body.json.")]
    InvalidBody(String),

    /// The server did not answer a ping
    #[error("OpenCGA server at '{0}' is not reachable. Check --host and that the server is running.")]
    Unreachable(String),

    /// File system operation failed
    #[error("File operation failed: {0}. Check the path and your read permissions.")]
    Io(#[from] std::io::Error),

    /// Output could not be encoded
    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }
}
