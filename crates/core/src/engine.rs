//! Engine capability boundary.
//!
//! An analysis engine is an opaque external component that accepts a tool id
//! and input text and emits free-form text. Implementations live outside this
//! crate; the subprocess adapter in `newslens-engine` is the default one.

use crate::tools::AnalysisTool;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by an analysis engine invocation.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The engine executable could not be started.
    #[error("failed to start analysis engine '{command}': {source}")]
    Spawn {
        /// Executable that was invoked.
        command: String,
        /// Underlying spawn failure.
        #[source]
        source: std::io::Error,
    },

    /// The engine terminated abnormally.
    #[error("analysis engine exited abnormally (code {code:?}): {stderr}")]
    Exited {
        /// Process exit code; none when the process was killed by a signal.
        code: Option<i32>,
        /// Captured stderr, for diagnostics.
        stderr: String,
    },

    /// Capturing the engine's output failed.
    #[error("engine I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A pluggable analysis capability.
///
/// `invoke` passes the tool id and input text as positional inputs and
/// resolves with the engine's complete textual output, concatenated in
/// arrival order. An empty output from a cleanly exiting engine is a success
/// (downstream parsing degrades it to an unparsed record or an empty
/// summary); only failure to run or abnormal termination is an error.
///
/// The invocation itself imposes no timeout; a surrounding transport layer
/// may bound it.
#[async_trait]
pub trait AnalysisEngine: Send + Sync {
    /// Run the engine for `tool` over `text` and collect its output.
    async fn invoke(
        &self,
        tool: AnalysisTool,
        text: &str,
    ) -> std::result::Result<String, EngineError>;
}
