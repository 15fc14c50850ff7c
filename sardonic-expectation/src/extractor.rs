//! Text-in, expectations-out front end for the cascade.

use sardonic::{Inflector, Tagger};
use tracing::instrument;

use crate::{extract_expectations, AntonymTable, ExpectationError, ExpectationResult};

/// Tags an event with the configured tagger and runs the rule cascade.
#[derive(Debug, Clone)]
pub struct ExpectationExtractor<T, I> {
    tagger: T,
    inflector: I,
    antonyms: AntonymTable,
}

impl<T: Tagger, I: Inflector> ExpectationExtractor<T, I> {
    pub fn new(tagger: T, inflector: I, antonyms: AntonymTable) -> Self {
        Self {
            tagger,
            inflector,
            antonyms,
        }
    }

    pub fn antonyms(&self) -> &AntonymTable {
        &self.antonyms
    }

    /// Compute failed expectations for an event such as "Ben won the marathon".
    ///
    /// Expectations are propositions roughly opposite in meaning to the
    /// event, e.g. "Ben did not win the marathon" or "Ben lost the marathon".
    #[instrument(level = "debug", skip(self), fields(event_len = event.len()))]
    pub fn extract(&self, event: &str, use_antonyms: bool) -> ExpectationResult<Vec<String>> {
        let sentence = self.tagger.tag(event).map_err(ExpectationError::Tagger)?;
        tracing::debug!(
            target: "sardonic_expectation",
            tokens = sentence.len(),
            subject = sentence.subject().map(|token| token.text.as_str()),
            "tagged event"
        );
        extract_expectations(&sentence, &self.antonyms, &self.inflector, use_antonyms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sardonic::scripted::{ScriptedInflector, ScriptedTagger};
    use sardonic::{BoxError, TaggedSentence};

    struct BrokenTagger;

    impl Tagger for BrokenTagger {
        fn tag(&self, _text: &str) -> Result<TaggedSentence, BoxError> {
            Err("tagger offline".into())
        }
    }

    #[test]
    fn tags_then_extracts() {
        let tagger = ScriptedTagger::new()
            .with_sentence(
                "Ben won the marathon",
                "Ben|PROPN|NNP won|VERB|VBD|win the|DET|DT marathon|NOUN|NN",
            )
            .unwrap();
        let inflector = ScriptedInflector::new().with("lose", "VBD", "lost");
        let antonyms: AntonymTable = [("win", "lose")].into_iter().collect();
        let extractor = ExpectationExtractor::new(tagger, inflector, antonyms);

        assert_eq!(
            extractor.extract("Ben won the marathon", true).unwrap(),
            ["Ben did not win the marathon", "Ben lost the marathon"]
        );
        assert_eq!(
            extractor.extract("Ben won the marathon", false).unwrap(),
            ["Ben did not win the marathon"]
        );
    }

    #[test]
    fn tagger_failure_propagates() {
        let extractor =
            ExpectationExtractor::new(BrokenTagger, ScriptedInflector::new(), AntonymTable::new());

        let err = extractor.extract("Ben won", true).unwrap_err();
        assert!(matches!(
            err,
            ExpectationError::Tagger(ref source) if source.to_string() == "tagger offline"
        ));
    }

    #[test]
    fn single_token_event_is_too_short() {
        let extractor = ExpectationExtractor::new(
            ScriptedTagger::new(),
            ScriptedInflector::new(),
            AntonymTable::new(),
        );

        let err = extractor.extract("Ben", true).unwrap_err();
        assert!(matches!(err, ExpectationError::InputTooShort { len: 1 }));
    }
}
