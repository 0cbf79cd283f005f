//! HTTP API server for Newslens.
//!
//! Exposes the analysis dispatch service over Axum: one endpoint accepts
//! `{ text, tool }` and returns the raw engine output together with the typed
//! result parsed from it, so clients never re-derive results by re-parsing
//! engine text themselves.

#![deny(unsafe_code)]

pub mod analyze;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod router;
pub mod server;

pub use config::*;
pub use dispatch::*;
pub use error::*;
pub use router::*;
pub use server::*;
