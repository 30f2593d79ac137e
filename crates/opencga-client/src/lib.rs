//! OpenCGA REST client
//!
//! Client for the OpenCGA web services: alignment and clinical analysis,
//! families, samples, projects and administration.
//!
//! # Overview
//!
//! - **Endpoint tables**: every REST action is a static [`Endpoint`]
//!   descriptor grouped by [`Category`] (see [`resources`])
//! - **Resource client**: one generic [`ResourceClient`] per category builds
//!   a [`Call`] for any endpoint of its table
//! - **Options bag**: [`Options`] holds named parameters and is never
//!   mutated behind the caller's back
//! - **Transport**: [`HttpTransport`] templates the URL, attaches the token and
//!   sends the request; any [`Transport`] can stand in for it
//!
//! Calls return the server's JSON unchanged. [`RestResponse`] offers an
//! optional view of the standard envelope.
//!
//! # Example
//!
//! ```no_run
//! use opencga_client::{ClientConfig, OpenCgaClient};
//!
//! # async fn run() -> opencga_client::Result<()> {
//! let config = ClientConfig::new("https://ws.opencb.org/opencga").with_token("my-token");
//! let client = OpenCgaClient::new(config)?;
//!
//! let stats = client
//!     .alignment()
//!     .call("run_stats")?
//!     .arg("file", "HG00096.bam")
//!     .option("study", "user@project:study")
//!     .send()
//!     .await?;
//!
//! println!("{}", stats);
//! # Ok(())
//! # }
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod options;
pub mod request;
pub mod resources;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use client::{OpenCgaClient, ResourceClient};
pub use config::ClientConfig;
pub use endpoint::{BodyKind, Category, Endpoint, HttpMethod};
pub use error::{ClientError, Result};
pub use options::Options;
pub use request::{Call, RestRequest};
pub use transport::{HttpTransport, Transport};
pub use types::RestResponse;
