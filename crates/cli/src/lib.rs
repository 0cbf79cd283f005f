//! Command-line interface for Newslens.
//!
//! Ties the workspace together: `serve` runs the HTTP API server, `analyze`
//! performs a one-shot analysis against a local engine or a running server,
//! and `tools` lists the dispatchable analysis capabilities.

pub mod app;
pub mod commands;
pub mod error;

pub use error::{CliError, Result};
