//! Stateless dispatch from analysis requests to typed results.

use newslens_analysis::parse_engine_output;
use newslens_core::config::EngineConfig;
use newslens_core::tools::tool_id;
use newslens_core::{Analysis, AnalysisEngine, AnalysisRequest, EngineError};
use newslens_engine::SubprocessEngine;
use std::sync::Arc;
use tracing::warn;

/// Outcome of a dispatched analysis request.
#[derive(Debug, Clone)]
pub struct Dispatched {
    /// Complete raw engine output.
    pub raw: String,

    /// Typed result parsed from the raw output.
    pub analysis: Analysis,
}

/// Routes requests to the analysis engine and normalizes the output.
///
/// Holds no per-request state: a single instance serves concurrent requests
/// without coordination, and each call performs exactly one engine
/// invocation with no retries.
#[derive(Clone)]
pub struct Dispatcher {
    engine: Arc<dyn AnalysisEngine>,
}

impl Dispatcher {
    /// Create a dispatcher over any engine implementation.
    pub fn new(engine: Arc<dyn AnalysisEngine>) -> Self {
        Self { engine }
    }

    /// Create a dispatcher over the subprocess engine described by `config`.
    pub fn from_engine_config(config: &EngineConfig) -> Self {
        Self::new(Arc::new(SubprocessEngine::new(config)))
    }

    /// Run one analysis: a single engine invocation, then parsing.
    ///
    /// Engine failures propagate to the caller; output that does not match
    /// the tool's expected shape degrades to [`Analysis::Unparsed`] and is
    /// not an error.
    pub async fn dispatch(&self, request: &AnalysisRequest) -> Result<Dispatched, EngineError> {
        let raw = self.engine.invoke(request.tool, &request.text).await?;
        let analysis = parse_engine_output(request.tool, &raw);

        if matches!(analysis, Analysis::Unparsed(_)) {
            warn!(
                tool = tool_id(&request.tool),
                "engine output did not match the expected pattern"
            );
        }

        Ok(Dispatched { raw, analysis })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newslens_core::{AnalysisTool, SentimentBreakdown};
    use newslens_engine::ScriptedEngine;

    fn request(tool: AnalysisTool) -> AnalysisRequest {
        AnalysisRequest {
            tool,
            text: "input text".to_string(),
        }
    }

    #[tokio::test]
    async fn dispatch_returns_raw_and_typed_result() {
        let engine = Arc::new(ScriptedEngine::with_output(
            "Sentiment: Positive (Score: 0.80)",
        ));
        let dispatcher = Dispatcher::new(engine.clone());

        let dispatched = dispatcher
            .dispatch(&request(AnalysisTool::Sentiment))
            .await
            .unwrap();

        assert_eq!(dispatched.raw, "Sentiment: Positive (Score: 0.80)");
        assert_eq!(
            dispatched.analysis,
            Analysis::Sentiment(SentimentBreakdown {
                positive: 80,
                neutral: 10,
                negative: 10,
            })
        );
        assert_eq!(engine.invocation_count(), 1);
    }

    #[tokio::test]
    async fn engine_failure_propagates_as_an_error() {
        let engine = Arc::new(ScriptedEngine::failing());
        let dispatcher = Dispatcher::new(engine.clone());

        let err = dispatcher
            .dispatch(&request(AnalysisTool::Plagiarism))
            .await
            .unwrap_err();

        assert!(matches!(err, EngineError::Exited { .. }));
        assert_eq!(engine.invocation_count(), 1);
    }

    #[tokio::test]
    async fn unmatched_output_is_a_success_not_an_error() {
        let engine = Arc::new(ScriptedEngine::with_output("free-form commentary"));
        let dispatcher = Dispatcher::new(engine);

        let dispatched = dispatcher
            .dispatch(&request(AnalysisTool::FakeNews))
            .await
            .unwrap();

        match dispatched.analysis {
            Analysis::Unparsed(unparsed) => {
                assert_eq!(unparsed.tool, AnalysisTool::FakeNews);
                assert_eq!(unparsed.raw, "free-form commentary");
            }
            other => panic!("expected unparsed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn empty_engine_output_degrades_instead_of_failing() {
        let engine = Arc::new(ScriptedEngine::with_output(""));
        let dispatcher = Dispatcher::new(engine);

        let dispatched = dispatcher
            .dispatch(&request(AnalysisTool::Summarizer))
            .await
            .unwrap();
        assert_eq!(
            dispatched.analysis,
            Analysis::Summarizer(newslens_core::Summary { summary: vec![] })
        );

        let engine = Arc::new(ScriptedEngine::with_output(""));
        let dispatcher = Dispatcher::new(engine);
        let dispatched = dispatcher
            .dispatch(&request(AnalysisTool::Sentiment))
            .await
            .unwrap();
        assert!(matches!(dispatched.analysis, Analysis::Unparsed(_)));
    }
}
