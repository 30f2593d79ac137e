//! CLI command implementations
//!
//! Each subcommand has its own module with a `run` function.

pub mod call;
pub mod config;
pub mod endpoints;
pub mod ping;
