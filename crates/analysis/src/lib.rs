//! Engine output parsing and sentiment normalization for Newslens.
//!
//! Analysis engines emit free-form text following informal conventions, not a
//! schema. This crate pins those conventions down as explicit pattern-matching
//! rules and converts matched output into the typed records in
//! `newslens-core`. Output that matches no rule degrades to an unparsed
//! record instead of an error, so phrasing drift in an engine stays visible
//! rather than crashing requests.

#![deny(missing_docs, unsafe_code)]

/// Tool-specific extraction rules over raw engine output.
pub mod parser;

/// Sentiment score redistribution across the three categories.
pub mod sentiment;

pub use parser::parse_engine_output;
pub use sentiment::redistribute;
