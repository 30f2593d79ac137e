//! Request assembly
//!
//! A [`Call`] collects the identifiers, options and body for one endpoint and
//! turns them into a [`RestRequest`]: the verb, the relative path and the
//! final options bag that the transport sends.

use crate::endpoint::{BodyKind, Category, Endpoint, HttpMethod};
use crate::error::{ClientError, Result};
use crate::options::Options;
use crate::transport::Transport;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::trace;

/// A fully assembled request, ready for a [`Transport`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestRequest {
    pub method: HttpMethod,
    /// Path relative to the API version (`families/F1/info`)
    pub path: String,
    pub options: Options,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

/// Builder for one call to one endpoint
///
/// Every method consumes and returns the builder; nothing passed in by
/// reference is modified.
#[derive(Clone)]
pub struct Call<'a> {
    category: &'static Category,
    endpoint: &'static Endpoint,
    transport: &'a dyn Transport,
    args: BTreeMap<String, String>,
    options: Options,
    body: Option<Value>,
}

impl<'a> Call<'a> {
    pub(crate) fn new(
        category: &'static Category,
        endpoint: &'static Endpoint,
        transport: &'a dyn Transport,
    ) -> Self {
        Self {
            category,
            endpoint,
            transport,
            args: BTreeMap::new(),
            options: Options::new(),
            body: None,
        }
    }

    /// Supply a required identifier
    ///
    /// Path ids are embedded in the URL; any other name is merged into the
    /// options bag, overriding an option of the same key. Comma-separated
    /// lists are passed through as given.
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }

    /// Add one named option
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options = self.options.with(key, value);
        self
    }

    /// Overlay a caller-owned options bag
    pub fn options(mut self, options: &Options) -> Self {
        self.options = self.options.merged(options);
        self
    }

    /// Set the JSON request body
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize `body` and set it as the request body
    pub fn json_body<T: Serialize + ?Sized>(self, body: &T) -> Result<Self> {
        Ok(self.body(serde_json::to_value(body)?))
    }

    pub fn endpoint(&self) -> &'static Endpoint {
        self.endpoint
    }

    pub fn category(&self) -> &'static Category {
        self.category
    }

    fn qualified_name(&self) -> String {
        format!("{}.{}", self.category.key, self.endpoint.name)
    }

    fn path_arg(&self, name: Option<&'static str>) -> Result<Option<&str>> {
        let Some(name) = name else {
            return Ok(None);
        };

        match self.args.get(name).map(String::as_str) {
            Some(value) if !value.trim().is_empty() => Ok(Some(value)),
            _ => Err(ClientError::missing_argument(self.qualified_name(), name)),
        }
    }

    /// Assemble the request without sending it
    pub fn build(&self) -> Result<RestRequest> {
        let endpoint = self.endpoint;
        let path_id = self.path_arg(endpoint.path_id)?;
        let second_path_id = self.path_arg(endpoint.second_path_id)?;

        let mut options = self.options.clone();
        for (name, value) in &self.args {
            if !endpoint.is_path_id(name) {
                options.insert(name.clone(), value.clone());
            }
        }

        // Null values never reach the query string, so they count as absent
        if let Some(missing) = endpoint
            .required
            .iter()
            .find(|key| !matches!(options.get(key), Some(value) if !value.is_null()))
        {
            return Err(ClientError::missing_argument(self.qualified_name(), *missing));
        }

        if endpoint.body == BodyKind::Required && self.body.is_none() {
            return Err(ClientError::missing_argument(self.qualified_name(), "body"));
        }

        let request = RestRequest {
            method: endpoint.method,
            path: endpoint.path(self.category.path, path_id, second_path_id),
            options,
            body: self.body.clone(),
        };

        trace!(endpoint = %self.qualified_name(), path = %request.path, "Assembled request");

        Ok(request)
    }

    /// Assemble the request and dispatch it, returning the raw response
    pub async fn send(self) -> Result<Value> {
        let request = self.build()?;
        self.transport.execute(request).await
    }
}
