//! Subprocess-based analysis engine adapter.

use async_trait::async_trait;
use newslens_core::config::EngineConfig;
use newslens_core::tools::tool_id;
use newslens_core::{AnalysisEngine, AnalysisTool, EngineError};
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Analysis engine that runs an external executable per request.
///
/// The executable receives the configured fixed arguments followed by the
/// tool id and the input text as its two positional arguments, and writes its
/// entire result to stdout. Stdout is collected until the process exits, with
/// chunk arrival order preserved; stderr is captured separately for the
/// failure diagnostic.
#[derive(Debug, Clone)]
pub struct SubprocessEngine {
    command: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl SubprocessEngine {
    /// Create an adapter from an engine configuration.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
            working_dir: config.working_dir.clone(),
        }
    }

    /// Executable this adapter runs.
    pub fn command(&self) -> &str {
        &self.command
    }
}

#[async_trait]
impl AnalysisEngine for SubprocessEngine {
    async fn invoke(&self, tool: AnalysisTool, text: &str) -> Result<String, EngineError> {
        let mut command = Command::new(&self.command);
        command
            .args(&self.args)
            .arg(tool_id(&tool))
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // An abandoned request must not leave the engine process running.
            .kill_on_drop(true);

        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        debug!(
            tool = tool_id(&tool),
            command = %self.command,
            "invoking analysis engine"
        );

        let child = command.spawn().map_err(|source| EngineError::Spawn {
            command: self.command.clone(),
            source,
        })?;

        let output = child.wait_with_output().await?;

        if !output.status.success() {
            return Err(EngineError::Exited {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn shell_engine(script: &str) -> SubprocessEngine {
        SubprocessEngine::new(&EngineConfig {
            command: "sh".to_string(),
            args: vec!["-c".to_string(), script.to_string(), "engine".to_string()],
            working_dir: None,
        })
    }

    #[tokio::test]
    async fn invoke_collects_stdout() {
        let engine = shell_engine("printf 'Plagiarism detected: 35%%'");
        let output = engine
            .invoke(AnalysisTool::Plagiarism, "some article")
            .await
            .unwrap();
        assert_eq!(output, "Plagiarism detected: 35%");
    }

    #[tokio::test]
    async fn invoke_passes_tool_id_and_text_positionally() {
        let engine = shell_engine("printf '%s|%s' \"$1\" \"$2\"");
        let output = engine
            .invoke(AnalysisTool::FakeNews, "hello world")
            .await
            .unwrap();
        assert_eq!(output, "fake-news|hello world");
    }

    #[tokio::test]
    async fn empty_output_from_clean_exit_is_not_an_error() {
        let engine = shell_engine("true");
        let output = engine.invoke(AnalysisTool::Summarizer, "").await.unwrap();
        assert_eq!(output, "");
    }

    #[tokio::test]
    async fn abnormal_exit_surfaces_code_and_stderr() {
        let engine = shell_engine("echo boom >&2; exit 3");
        let err = engine
            .invoke(AnalysisTool::Sentiment, "text")
            .await
            .unwrap_err();
        match err {
            EngineError::Exited { code, stderr } => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "boom");
            }
            other => panic!("expected Exited, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_executable_is_a_spawn_failure() {
        let engine = SubprocessEngine::new(&EngineConfig {
            command: "/nonexistent/newslens-engine".to_string(),
            args: Vec::new(),
            working_dir: None,
        });
        let err = engine
            .invoke(AnalysisTool::Sentiment, "text")
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::Spawn { .. }));
    }
}
