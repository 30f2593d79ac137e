//! OpenCGA Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Ambient plumbing shared by the OpenCGA workspace members.
//!
//! - **Logging**: one `tracing` subscriber setup for every binary
//!
//! # Example
//!
//! ```no_run
//! use opencga_common::logging::{init_logging, LogConfig, LogLevel};
//!
//! let config = LogConfig::builder().level(LogLevel::Debug).build();
//! let _guard = init_logging(&config).expect("logging");
//! ```

pub mod logging;

pub use logging::{init_logging, LogConfig, LogFormat, LogLevel, LogOutput};
