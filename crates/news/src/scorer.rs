//! Headline sentiment scoring.

use vader_sentiment::SentimentIntensityAnalyzer;

/// Scores a text's overall polarity on [-1, 1].
pub trait SentimentScorer {
    /// Compound polarity score for `text`.
    fn compound(&self, text: &str) -> f64;
}

/// Lexicon/rule-based scorer backed by VADER.
///
/// The compound score is taken as-is; headlines are short enough that no
/// domain-specific boosting is applied on top.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    /// Create a new scorer.
    #[must_use]
    pub fn new() -> Self {
        Self { analyzer: SentimentIntensityAnalyzer::new() }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VaderScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaderScorer").finish_non_exhaustive()
    }
}

impl SentimentScorer for VaderScorer {
    fn compound(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }

        let scores = self.analyzer.polarity_scores(text);
        scores.get("compound").copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullish_headlines_score_positive() {
        let scorer = VaderScorer::new();

        for headline in [
            "Stocks surge to record highs on strong earnings",
            "Markets rally as investors cheer upbeat jobs report",
        ] {
            let score = scorer.compound(headline);
            assert!(score > 0.0, "expected positive score for '{headline}', got {score}");
        }
    }

    #[test]
    fn bearish_headlines_score_negative() {
        let scorer = VaderScorer::new();

        for headline in [
            "Markets crash amid panic selling and recession fears",
            "Shares plunge after disastrous earnings miss",
        ] {
            let score = scorer.compound(headline);
            assert!(score < 0.0, "expected negative score for '{headline}', got {score}");
        }
    }

    #[test]
    fn empty_text_scores_zero() {
        let scorer = VaderScorer::new();
        assert_eq!(scorer.compound(""), 0.0);
        assert_eq!(scorer.compound("   "), 0.0);
    }

    #[test]
    fn compound_stays_in_range() {
        let scorer = VaderScorer::new();
        let score = scorer.compound("Incredible amazing fantastic wonderful rally");
        assert!((-1.0..=1.0).contains(&score));
    }
}
