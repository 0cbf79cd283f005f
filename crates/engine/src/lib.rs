//! Analysis engine adapters for Newslens.
//!
//! The engine boundary treats every analysis capability as a black box that
//! takes a tool id and input text and emits free-form text. This crate ships
//! the subprocess adapter used in production and, behind the `test-utils`
//! feature, a scripted double for exercising the dispatch path in tests.

#![deny(unsafe_code)]

pub mod subprocess;

#[cfg(any(test, feature = "test-utils"))]
pub mod scripted;

pub use subprocess::SubprocessEngine;

#[cfg(any(test, feature = "test-utils"))]
pub use scripted::ScriptedEngine;
