//! Tool-specific extraction rules over raw engine output.

use crate::sentiment::redistribute;
use newslens_core::{
    Analysis, AnalysisTool, FakeNewsReport, PlagiarismReport, SentimentLabel, Summary,
    UnparsedOutput,
};
use once_cell::sync::Lazy;
use regex::Regex;

// The literal engine phrasings. Engines may surround them with commentary, so
// each pattern matches anywhere in the output; the first occurrence wins.
static SENTIMENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Sentiment: (\w+) \(Score: ([\d.]+)\)").expect("sentiment pattern"));

static PLAGIARISM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Plagiarism detected: (\d+)%").expect("plagiarism pattern"));

static FAKE_NEWS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Fake news probability: (\d+)%").expect("fake news pattern"));

/// Parse raw engine output into a typed result for `tool`.
///
/// Pure and total: the same input always yields the same record, and output
/// that matches no rule degrades to [`Analysis::Unparsed`] carrying the raw
/// text unchanged. Extraction takes exactly what matched; out-of-range values
/// are not clamped here.
pub fn parse_engine_output(tool: AnalysisTool, raw: &str) -> Analysis {
    let parsed = match tool {
        AnalysisTool::Summarizer => Some(Analysis::Summarizer(parse_summary(raw))),
        AnalysisTool::Sentiment => parse_sentiment(raw),
        AnalysisTool::Plagiarism => parse_plagiarism(raw),
        AnalysisTool::FakeNews => parse_fake_news(raw),
    };

    parsed.unwrap_or_else(|| {
        Analysis::Unparsed(UnparsedOutput {
            tool,
            raw: raw.to_string(),
        })
    })
}

fn parse_sentiment(raw: &str) -> Option<Analysis> {
    let captures = SENTIMENT_PATTERN.captures(raw)?;
    let label = captures[1].parse::<SentimentLabel>().ok()?;
    let score = captures[2].parse::<f64>().ok()?;
    Some(Analysis::Sentiment(redistribute(label, score)))
}

/// Split prose into sentence fragments on the period character.
///
/// Known limitation: abbreviations and decimal numbers also contain periods
/// and get split. The dashboard accepts this approximation, so it is kept as
/// the contract rather than replaced with a smarter segmenter.
fn parse_summary(raw: &str) -> Summary {
    Summary {
        summary: raw
            .split('.')
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .map(String::from)
            .collect(),
    }
}

fn parse_plagiarism(raw: &str) -> Option<Analysis> {
    let captures = PLAGIARISM_PATTERN.captures(raw)?;
    let percentage = captures[1].parse::<i64>().ok()?;
    Some(Analysis::Plagiarism(PlagiarismReport {
        plagiarism_percentage: percentage,
    }))
}

fn parse_fake_news(raw: &str) -> Option<Analysis> {
    let captures = FAKE_NEWS_PATTERN.captures(raw)?;
    let probability = captures[1].parse::<i64>().ok()?;
    Some(Analysis::FakeNews(FakeNewsReport {
        fake_news_probability: probability,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use newslens_core::{tools::analysis_tools, SentimentBreakdown};

    #[test]
    fn sentiment_output_is_redistributed() {
        let analysis =
            parse_engine_output(AnalysisTool::Sentiment, "Sentiment: Positive (Score: 0.80)");
        assert_eq!(
            analysis,
            Analysis::Sentiment(SentimentBreakdown {
                positive: 80,
                neutral: 10,
                negative: 10,
            })
        );
    }

    #[test]
    fn sentiment_pattern_matches_inside_commentary() {
        let raw = "Model response follows. Sentiment: negative (Score: 0.9). Thanks!";
        let analysis = parse_engine_output(AnalysisTool::Sentiment, raw);
        assert_eq!(
            analysis,
            Analysis::Sentiment(SentimentBreakdown {
                positive: 5,
                neutral: 5,
                negative: 90,
            })
        );
    }

    #[test]
    fn sentiment_with_unknown_label_is_unparsed() {
        let raw = "Sentiment: Confused (Score: 0.50)";
        let analysis = parse_engine_output(AnalysisTool::Sentiment, raw);
        assert_eq!(
            analysis,
            Analysis::Unparsed(UnparsedOutput {
                tool: AnalysisTool::Sentiment,
                raw: raw.to_string(),
            })
        );
    }

    #[test]
    fn sentiment_with_malformed_score_is_unparsed() {
        let raw = "Sentiment: Positive (Score: 0.8.2)";
        let analysis = parse_engine_output(AnalysisTool::Sentiment, raw);
        assert!(matches!(analysis, Analysis::Unparsed(_)));
    }

    #[test]
    fn summarizer_splits_on_periods_in_order() {
        let analysis = parse_engine_output(
            AnalysisTool::Summarizer,
            "AI is growing. It affects jobs. Ethics matter.",
        );
        assert_eq!(
            analysis,
            Analysis::Summarizer(Summary {
                summary: vec![
                    "AI is growing".to_string(),
                    "It affects jobs".to_string(),
                    "Ethics matter".to_string(),
                ],
            })
        );
    }

    #[test]
    fn summarizer_drops_whitespace_fragments_and_accepts_empty_output() {
        let analysis = parse_engine_output(AnalysisTool::Summarizer, " .  . ");
        assert_eq!(
            analysis,
            Analysis::Summarizer(Summary { summary: vec![] })
        );

        let analysis = parse_engine_output(AnalysisTool::Summarizer, "");
        assert_eq!(
            analysis,
            Analysis::Summarizer(Summary { summary: vec![] })
        );
    }

    #[test]
    fn summarizer_splits_decimal_numbers_too() {
        // Accepted approximation of period splitting, pinned so a future
        // "fix" shows up as a contract change.
        let analysis =
            parse_engine_output(AnalysisTool::Summarizer, "Growth reached 3.5 percent.");
        assert_eq!(
            analysis,
            Analysis::Summarizer(Summary {
                summary: vec!["Growth reached 3".to_string(), "5 percent".to_string()],
            })
        );
    }

    #[test]
    fn plagiarism_percentage_is_extracted() {
        let analysis = parse_engine_output(AnalysisTool::Plagiarism, "Plagiarism detected: 35%");
        assert_eq!(
            analysis,
            Analysis::Plagiarism(PlagiarismReport {
                plagiarism_percentage: 35,
            })
        );
    }

    #[test]
    fn fake_news_pattern_matches_despite_surrounding_text() {
        let analysis = parse_engine_output(
            AnalysisTool::FakeNews,
            "Some commentary. Fake news probability: 72%. More text.",
        );
        assert_eq!(
            analysis,
            Analysis::FakeNews(FakeNewsReport {
                fake_news_probability: 72,
            })
        );
    }

    #[test]
    fn first_pattern_occurrence_wins() {
        let analysis = parse_engine_output(
            AnalysisTool::Plagiarism,
            "Plagiarism detected: 10% (earlier pass said Plagiarism detected: 99%)",
        );
        assert_eq!(
            analysis,
            Analysis::Plagiarism(PlagiarismReport {
                plagiarism_percentage: 10,
            })
        );
    }

    #[test]
    fn out_of_range_values_are_not_clamped() {
        let analysis = parse_engine_output(AnalysisTool::Plagiarism, "Plagiarism detected: 250%");
        assert_eq!(
            analysis,
            Analysis::Plagiarism(PlagiarismReport {
                plagiarism_percentage: 250,
            })
        );
    }

    #[test]
    fn unmatched_output_degrades_to_unparsed_for_pattern_tools() {
        let raw = "garbage text with no pattern";
        for tool in analysis_tools() {
            let analysis = parse_engine_output(tool, raw);
            if tool == AnalysisTool::Summarizer {
                assert!(matches!(analysis, Analysis::Summarizer(_)));
            } else {
                assert_eq!(
                    analysis,
                    Analysis::Unparsed(UnparsedOutput {
                        tool,
                        raw: raw.to_string(),
                    })
                );
            }
        }
    }

    #[test]
    fn parsing_is_pure() {
        let raw = "Sentiment: neutral (Score: 0.42) with trailing notes";
        let first = parse_engine_output(AnalysisTool::Sentiment, raw);
        let second = parse_engine_output(AnalysisTool::Sentiment, raw);
        assert_eq!(first, second);
    }
}
