//! Registry of the analysis tools Newslens can dispatch to.
//!
//! Tool identifiers are the wire-level contract shared with the dashboard
//! and with the analysis engines: the id string is passed verbatim to the
//! engine as its first positional argument.

use serde::{Deserialize, Serialize};

/// Analysis tools supported by Newslens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisTool {
    /// Text summarization.
    Summarizer,

    /// Sentiment analysis.
    Sentiment,

    /// Plagiarism detection.
    Plagiarism,

    /// Fake news detection.
    FakeNews,
}

/// All tools, in dashboard display order.
pub fn analysis_tools() -> Vec<AnalysisTool> {
    vec![
        AnalysisTool::Summarizer,
        AnalysisTool::Sentiment,
        AnalysisTool::Plagiarism,
        AnalysisTool::FakeNews,
    ]
}

/// Convert a tool enum to its stable id.
pub fn tool_id(tool: &AnalysisTool) -> &'static str {
    match tool {
        AnalysisTool::Summarizer => "summarizer",
        AnalysisTool::Sentiment => "sentiment",
        AnalysisTool::Plagiarism => "plagiarism",
        AnalysisTool::FakeNews => "fake-news",
    }
}

/// Human-readable tool name for listings.
pub fn tool_display_name(tool: &AnalysisTool) -> &'static str {
    match tool {
        AnalysisTool::Summarizer => "Summarizer",
        AnalysisTool::Sentiment => "Sentiment analysis",
        AnalysisTool::Plagiarism => "Plagiarism ai",
        AnalysisTool::FakeNews => "Fake news analysis",
    }
}

/// Parse a tool id into a known tool.
///
/// Strict by contract: unrecognized ids yield `None` and are rejected before
/// any engine invocation.
pub fn parse_tool_id(raw: &str) -> Option<AnalysisTool> {
    let normalized = raw.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "summarizer" => Some(AnalysisTool::Summarizer),
        "sentiment" => Some(AnalysisTool::Sentiment),
        "plagiarism" => Some(AnalysisTool::Plagiarism),
        "fake-news" => Some(AnalysisTool::FakeNews),
        _ => None,
    }
}
