//! Ranking adapter from label scores to a single sentiment label.

use std::cmp::Ordering;

use sardonic::{BoxError, SentimentClassifier, SentimentLabel, SentimentScorer};

/// Replace user handles with `@user` and links with `http`.
pub fn preprocess_text(text: &str) -> String {
    text.split_whitespace()
        .map(|token| {
            if token.starts_with('@') && token.len() > 1 {
                "@user"
            } else if token.starts_with("http") {
                "http"
            } else {
                token
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Picks the best-scoring label that is not excluded.
///
/// With the default exclusion of `neutral`, every sentence is read as
/// either positive or negative, whichever the scorer leans to.
#[derive(Debug, Clone)]
pub struct RankedSentiment<S> {
    scorer: S,
    excluded: Vec<SentimentLabel>,
}

impl<S: SentimentScorer> RankedSentiment<S> {
    pub fn new(scorer: S) -> Self {
        Self::with_excluded(scorer, [SentimentLabel::new("neutral")])
    }

    pub fn with_excluded(scorer: S, excluded: impl IntoIterator<Item = SentimentLabel>) -> Self {
        Self {
            scorer,
            excluded: excluded.into_iter().collect(),
        }
    }

    pub fn excluded(&self) -> &[SentimentLabel] {
        &self.excluded
    }

    /// Every label with its score, best first. Ties keep the scorer's order.
    pub fn distribution(&self, text: &str) -> Result<Vec<(SentimentLabel, f64)>, BoxError> {
        let mut scores = self.scorer.scores(&preprocess_text(text))?;
        scores.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(Ordering::Equal));
        Ok(scores)
    }
}

impl<S: SentimentScorer> SentimentClassifier for RankedSentiment<S> {
    fn classify(&self, text: &str) -> Result<SentimentLabel, BoxError> {
        self.distribution(text)?
            .into_iter()
            .map(|(label, _)| label)
            .find(|label| !self.excluded.contains(label))
            .ok_or_else(|| format!("every sentiment label is excluded for '{}'", text).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Returns fixed scores and records what it was asked to score.
    struct FixedScores {
        scores: Vec<(&'static str, f64)>,
        seen: RefCell<Vec<String>>,
    }

    impl FixedScores {
        fn new(scores: &[(&'static str, f64)]) -> Self {
            Self {
                scores: scores.to_vec(),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl SentimentScorer for FixedScores {
        fn scores(&self, text: &str) -> Result<Vec<(SentimentLabel, f64)>, BoxError> {
            self.seen.borrow_mut().push(text.to_string());
            Ok(self
                .scores
                .iter()
                .map(|(label, score)| (SentimentLabel::from(*label), *score))
                .collect())
        }
    }

    #[test]
    fn handles_and_links_are_masked() {
        assert_eq!(
            preprocess_text("@ben won http://x.y @ and https://z"),
            "@user won http @ and http"
        );
    }

    #[test]
    fn neutral_is_skipped_by_default() {
        let scorer = FixedScores::new(&[("negative", 0.2), ("neutral", 0.7), ("positive", 0.1)]);
        let ranked = RankedSentiment::new(scorer);

        assert_eq!(ranked.classify("@ben is fine").unwrap().as_str(), "negative");
        assert_eq!(ranked.scorer.seen.borrow().as_slice(), ["@user is fine"]);
    }

    #[test]
    fn distribution_is_sorted_best_first() {
        let ranked = RankedSentiment::new(FixedScores::new(&[
            ("negative", 0.2),
            ("neutral", 0.7),
            ("positive", 0.1),
        ]));
        let labels: Vec<_> = ranked
            .distribution("ok")
            .unwrap()
            .into_iter()
            .map(|(label, _)| label.0)
            .collect();
        assert_eq!(labels, ["neutral", "negative", "positive"]);
    }

    #[test]
    fn everything_excluded_is_an_error() {
        let ranked = RankedSentiment::with_excluded(
            FixedScores::new(&[("neutral", 1.0)]),
            [SentimentLabel::new("neutral")],
        );
        assert!(ranked.classify("ok").is_err());
    }
}
