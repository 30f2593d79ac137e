//! Request dispatch
//!
//! [`Transport`] is the seam between request assembly and the network.
//! [`HttpTransport`] is the real implementation; tests plug in their own.

use crate::config::ClientConfig;
use crate::endpoint::HttpMethod;
use crate::error::{ClientError, Result};
use crate::request::RestRequest;
use crate::types::RestResponse;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Sends an assembled request and returns the parsed response body
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: RestRequest) -> Result<Value>;
}

/// HTTP transport for an OpenCGA REST server
///
/// Builds `{host}/webservices/rest/{version}/{path}`, sends the options bag
/// as the query string for every verb and the body as JSON on POST. The token,
/// when configured, goes in an `Authorization: Bearer` header.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: ClientConfig,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("opencga-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL for a request path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url(), path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip_all, fields(method = %request.method, path = %request.path))]
    async fn execute(&self, request: RestRequest) -> Result<Value> {
        let url = self.url(&request.path);
        let query = request.options.to_query_pairs(self.config.camel_case_options);

        debug!(options = query.len(), has_body = request.body.is_some(), "Dispatching request");

        let builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Delete => self.client.delete(&url),
            HttpMethod::Post => self
                .client
                .post(&url)
                .json(&request.body.unwrap_or_else(|| json!({}))),
        };

        let builder = builder.query(&query);
        let builder = match self.config.token.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = server_message(&text)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());
            warn!(status = status.as_u16(), message = %message, "Request rejected by server");
            return Err(ClientError::server(status.as_u16(), message));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }
}

/// Best human-readable message from an error response body
fn server_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| RestResponse::from_value(value).ok())
        .and_then(|response| response.first_error().map(str::to_string))
        .or_else(|| Some(body.to_string()))
}
