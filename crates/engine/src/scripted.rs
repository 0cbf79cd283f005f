//! Scripted engine double for tests.

use async_trait::async_trait;
use newslens_core::{AnalysisEngine, AnalysisTool, EngineError};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone)]
enum Reply {
    Output(String),
    Failure { code: Option<i32>, stderr: String },
}

/// Engine double that answers from a fixed script and counts invocations.
#[derive(Debug)]
pub struct ScriptedEngine {
    reply: Reply,
    invocations: AtomicUsize,
}

impl ScriptedEngine {
    /// Engine that always answers with `output`.
    pub fn with_output(output: impl Into<String>) -> Self {
        Self {
            reply: Reply::Output(output.into()),
            invocations: AtomicUsize::new(0),
        }
    }

    /// Engine whose process always exits abnormally.
    pub fn failing() -> Self {
        Self {
            reply: Reply::Failure {
                code: Some(1),
                stderr: "engine crashed".to_string(),
            },
            invocations: AtomicUsize::new(0),
        }
    }

    /// Number of `invoke` calls seen so far.
    pub fn invocation_count(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisEngine for ScriptedEngine {
    async fn invoke(&self, _tool: AnalysisTool, _text: &str) -> Result<String, EngineError> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Reply::Output(output) => Ok(output.clone()),
            Reply::Failure { code, stderr } => Err(EngineError::Exited {
                code: *code,
                stderr: stderr.clone(),
            }),
        }
    }
}
