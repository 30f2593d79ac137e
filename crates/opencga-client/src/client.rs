//! OpenCGA client
//!
//! [`OpenCgaClient`] owns the transport; [`ResourceClient`] binds it to one
//! category table and hands out [`Call`] builders for its endpoints.

use crate::config::ClientConfig;
use crate::endpoint::{Category, Endpoint};
use crate::error::{ClientError, Result};
use crate::request::Call;
use crate::resources;
use crate::transport::{HttpTransport, Transport};
use std::sync::Arc;
use tracing::debug;

/// Entry point: one shared transport, any number of resource clients
#[derive(Clone)]
pub struct OpenCgaClient {
    transport: Arc<dyn Transport>,
}

impl OpenCgaClient {
    /// Create a client talking HTTP to the configured server
    pub fn new(config: ClientConfig) -> Result<Self> {
        debug!(host = %config.host, version = %config.version, "Creating OpenCGA client");
        Ok(Self::with_transport(Arc::new(HttpTransport::new(config)?)))
    }

    /// Create from `OPENCGA_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a client over any transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Client for an arbitrary category table
    pub fn resource(&self, category: &'static Category) -> ResourceClient<'_> {
        ResourceClient {
            category,
            transport: self.transport.as_ref(),
        }
    }

    /// Client for a registered category, by key or URL path
    pub fn category(&self, name: &str) -> Result<ResourceClient<'_>> {
        Ok(self.resource(resources::category(name)?))
    }

    pub fn alignment(&self) -> ResourceClient<'_> {
        self.resource(&resources::ALIGNMENT)
    }

    pub fn clinical(&self) -> ResourceClient<'_> {
        self.resource(&resources::CLINICAL)
    }

    pub fn families(&self) -> ResourceClient<'_> {
        self.resource(&resources::FAMILIES)
    }

    pub fn samples(&self) -> ResourceClient<'_> {
        self.resource(&resources::SAMPLES)
    }

    pub fn projects(&self) -> ResourceClient<'_> {
        self.resource(&resources::PROJECTS)
    }

    pub fn meta(&self) -> ResourceClient<'_> {
        self.resource(&resources::META)
    }

    pub fn admin(&self) -> ResourceClient<'_> {
        self.resource(&resources::ADMIN)
    }

    pub fn ga4gh(&self) -> ResourceClient<'_> {
        self.resource(&resources::GA4GH)
    }

    /// Check that the server answers `meta/ping`
    ///
    /// Network and HTTP failures report `false`; a success status counts as
    /// reachable whatever the body holds.
    pub async fn ping(&self) -> Result<bool> {
        match self.meta().call("ping")?.send().await {
            Ok(_) | Err(ClientError::Json(_)) => Ok(true),
            Err(ClientError::Http(_)) | Err(ClientError::Server { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }
}

/// One category bound to a transport
#[derive(Clone, Copy)]
pub struct ResourceClient<'a> {
    category: &'static Category,
    transport: &'a dyn Transport,
}

impl<'a> ResourceClient<'a> {
    pub fn category(&self) -> &'static Category {
        self.category
    }

    pub fn endpoints(&self) -> &'static [Endpoint] {
        self.category.endpoints
    }

    /// Start a call to the named endpoint
    pub fn call(&self, endpoint: &str) -> Result<Call<'a>> {
        let endpoint = self.category.require(endpoint)?;
        Ok(Call::new(self.category, endpoint, self.transport))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = OpenCgaClient::new(ClientConfig::new("http://localhost:8080/opencga")).unwrap();
        assert_eq!(client.families().category().path, "families");
        assert_eq!(client.category("analysis/clinical").unwrap().category().key, "clinical");
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(OpenCgaClient::new(ClientConfig::new("not-a-url")).is_err());
    }

    #[test]
    fn test_unknown_endpoint() {
        let client = OpenCgaClient::new(ClientConfig::default()).unwrap();
        assert!(matches!(
            client.alignment().call("run_gatk"),
            Err(ClientError::UnknownEndpoint { .. })
        ));
    }

    #[tokio::test]
    async fn test_ping_unreachable() {
        let client = OpenCgaClient::new(ClientConfig::new("http://127.0.0.1:9").with_timeout_secs(2)).unwrap();
        assert!(!client.ping().await.unwrap());
    }
}
