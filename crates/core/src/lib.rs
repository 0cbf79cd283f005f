//! Core types, errors, and configuration for Newslens
//!
//! This crate provides the foundational types used throughout the Newslens
//! analysis pipeline: the registry of dispatchable analysis tools, the typed
//! result records produced from raw engine output, the engine capability
//! boundary, and the shared error taxonomy.

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod tools;
pub mod types;

// Re-exports for convenience
pub use config::NewslensConfig;
pub use engine::{AnalysisEngine, EngineError};
pub use error::{Error, Result};
pub use tools::*;
pub use types::*;
