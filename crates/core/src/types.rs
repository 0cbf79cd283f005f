use crate::error::Error;
use crate::tools::AnalysisTool;
use serde::{Deserialize, Serialize};

/// A single analysis request.
///
/// Requests are request-scoped and immutable once constructed; nothing is
/// persisted across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Tool to dispatch to.
    pub tool: AnalysisTool,

    /// Input text. May be empty: engines are allowed to produce a degenerate
    /// result (e.g. an empty summary) for empty input.
    pub text: String,
}

/// Sentiment category labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Positive sentiment.
    Positive,

    /// Neutral sentiment.
    Neutral,

    /// Negative sentiment.
    Negative,
}

impl SentimentLabel {
    /// Stable lowercase label string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl std::str::FromStr for SentimentLabel {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(SentimentLabel::Positive),
            "neutral" => Ok(SentimentLabel::Neutral),
            "negative" => Ok(SentimentLabel::Negative),
            other => Err(Error::Parse(format!("unknown sentiment label: {}", other))),
        }
    }
}

/// Sentiment shares on the 0-100 scale.
///
/// The three components sum to 100 up to a drift of at most one, because each
/// component is rounded independently during redistribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    /// Positive share.
    pub positive: i64,

    /// Neutral share.
    pub neutral: i64,

    /// Negative share.
    pub negative: i64,
}

impl SentimentBreakdown {
    /// Category with the highest share.
    ///
    /// Ties resolve in the fixed priority positive, then negative, then
    /// neutral, so a result always has a single winner for visual emphasis.
    pub fn dominant(&self) -> SentimentLabel {
        let max = self.positive.max(self.negative).max(self.neutral);
        if self.positive == max {
            SentimentLabel::Positive
        } else if self.negative == max {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// Ordered summary sentences split from the engine's prose output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Sentence fragments in engine output order.
    pub summary: Vec<String>,
}

/// Plagiarism detection result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlagiarismReport {
    /// Detected plagiarism percentage, exactly as extracted (not clamped).
    pub plagiarism_percentage: i64,
}

/// Fake news detection result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FakeNewsReport {
    /// Fake news probability percentage, exactly as extracted (not clamped).
    pub fake_news_probability: i64,
}

/// Engine output that did not match the tool's expected textual convention.
///
/// This is a valid, displayable outcome, distinct from an engine failure: the
/// engine responded, but in an unexpected shape. The raw text is kept so the
/// caller can still show something meaningful and operators can notice
/// phrasing drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnparsedOutput {
    /// Tool the request was dispatched to.
    pub tool: AnalysisTool,

    /// Original raw engine output, unchanged.
    pub raw: String,
}

/// Typed analysis results.
///
/// The `type` tag and field names match the dashboard's JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Analysis {
    /// Normalized sentiment shares.
    Sentiment(SentimentBreakdown),

    /// Ordered summary sentences.
    Summarizer(Summary),

    /// Plagiarism percentage.
    Plagiarism(PlagiarismReport),

    /// Fake news probability.
    FakeNews(FakeNewsReport),

    /// Output that matched no expected pattern.
    Unparsed(UnparsedOutput),
}
