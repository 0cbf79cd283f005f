//! Sentiment score redistribution.

use newslens_core::{SentimentBreakdown, SentimentLabel};

/// Spread a dominant label's confidence score across the three categories.
///
/// The named label's category receives `score * 100` of the 0-100 scale; the
/// remaining mass is split evenly between the two other categories, each
/// receiving `(1 - score) * 50`. Every component is then rounded
/// independently with round-half-away-from-zero (`f64::round`), so the sum
/// can drift to 99 or 101 for some scores. No re-scaling is applied after
/// rounding.
pub fn redistribute(label: SentimentLabel, score: f64) -> SentimentBreakdown {
    let named = score * 100.0;
    let other = (1.0 - score) * 50.0;

    let (positive, neutral, negative) = match label {
        SentimentLabel::Positive => (named, other, other),
        SentimentLabel::Neutral => (other, named, other),
        SentimentLabel::Negative => (other, other, named),
    };

    SentimentBreakdown {
        positive: positive.round() as i64,
        neutral: neutral.round() as i64,
        negative: negative.round() as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    fn component(breakdown: &SentimentBreakdown, label: SentimentLabel) -> i64 {
        match label {
            SentimentLabel::Positive => breakdown.positive,
            SentimentLabel::Neutral => breakdown.neutral,
            SentimentLabel::Negative => breakdown.negative,
        }
    }

    #[test]
    fn named_label_receives_the_score_share() {
        let breakdown = redistribute(SentimentLabel::Positive, 0.8);
        assert_eq!(breakdown.positive, 80);
        assert_eq!(breakdown.neutral, 10);
        assert_eq!(breakdown.negative, 10);
        assert_eq!(breakdown.dominant(), SentimentLabel::Positive);
    }

    #[test]
    fn full_confidence_collapses_to_one_category() {
        let breakdown = redistribute(SentimentLabel::Neutral, 1.0);
        assert_eq!(breakdown.positive, 0);
        assert_eq!(breakdown.neutral, 100);
        assert_eq!(breakdown.negative, 0);
    }

    #[test]
    fn zero_confidence_splits_evenly_across_the_others() {
        let breakdown = redistribute(SentimentLabel::Negative, 0.0);
        assert_eq!(breakdown.positive, 50);
        assert_eq!(breakdown.neutral, 50);
        assert_eq!(breakdown.negative, 0);
        // Even split resolves to positive under the fixed tie order.
        assert_eq!(breakdown.dominant(), SentimentLabel::Positive);
    }

    #[test]
    fn independent_rounding_keeps_the_sum_near_one_hundred() {
        let breakdown = redistribute(SentimentLabel::Positive, 0.335);
        assert_eq!(breakdown.positive, 34);
        assert_eq!(breakdown.neutral, 33);
        assert_eq!(breakdown.negative, 33);

        for label in LABELS {
            for step in 0..=1000 {
                let score = f64::from(step) / 1000.0;
                let breakdown = redistribute(label, score);
                for value in [breakdown.positive, breakdown.neutral, breakdown.negative] {
                    assert!((0..=100).contains(&value), "out of range for {:?}", score);
                }
                let sum = breakdown.positive + breakdown.neutral + breakdown.negative;
                assert!(
                    (99..=101).contains(&sum),
                    "sum {} out of bounds for score {}",
                    sum,
                    score
                );
            }
        }
    }

    #[test]
    fn named_label_dominates_above_half_confidence() {
        for label in LABELS {
            for step in 501..=1000 {
                let score = f64::from(step) / 1000.0;
                let breakdown = redistribute(label, score);
                let named = component(&breakdown, label);
                for other in LABELS.into_iter().filter(|l| *l != label) {
                    assert!(
                        named > component(&breakdown, other),
                        "{:?} not dominant at score {}",
                        label,
                        score
                    );
                }
                assert_eq!(breakdown.dominant(), label);
            }
        }
    }
}
