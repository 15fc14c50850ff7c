//! Scripted stand-ins for the external models.
//!
//! Each double returns canned data keyed by its input text, which makes the
//! rule cascade and the overlap filter testable without loading any model.

use std::collections::HashMap;

use crate::{
    BoxError, CommonsenseModel, CommonsenseObjectSet, Inflector, Pos, RelationType,
    SardonicResult, SentimentClassifier, SentimentLabel, Tag, Tagger, TaggedSentence, TaggedToken,
};

/// Tags whole sentences from a script, falling back to a word lexicon.
///
/// Words missing from the lexicon are tagged `X`/`XX` with a lower-cased lemma.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTagger {
    sentences: HashMap<String, TaggedSentence>,
    lexicon: HashMap<String, TaggedToken>,
}

impl ScriptedTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the full tagging of `text` using the `text|POS|TAG[|lemma]` format.
    pub fn with_sentence(mut self, text: &str, annotated: &str) -> SardonicResult<Self> {
        self.sentences
            .insert(text.to_string(), TaggedSentence::from_annotated(annotated)?);
        Ok(self)
    }

    /// Add lexicon entries, each in the `text|POS|TAG[|lemma]` format.
    pub fn with_words(mut self, annotated: &str) -> SardonicResult<Self> {
        for token in TaggedSentence::from_annotated(annotated)?.tokens() {
            self.lexicon.insert(token.text.clone(), token.clone());
        }
        Ok(self)
    }

    fn tag_word(&self, word: &str) -> TaggedToken {
        self.lexicon.get(word).cloned().unwrap_or_else(|| {
            TaggedToken::new(word, word.to_lowercase(), Pos::X, Tag::Other("XX".into()))
        })
    }
}

impl Tagger for ScriptedTagger {
    fn tag(&self, text: &str) -> Result<TaggedSentence, BoxError> {
        if let Some(sentence) = self.sentences.get(text) {
            return Ok(sentence.clone());
        }
        Ok(TaggedSentence::new(
            text.split_whitespace().map(|word| self.tag_word(word)).collect(),
        ))
    }
}

/// Inflects from a fixed `(lemma, tag) -> forms` table.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInflector {
    forms: HashMap<(String, Tag), Vec<String>>,
}

impl ScriptedInflector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, lemma: &str, tag: impl Into<Tag>, form: &str) -> Self {
        self.forms
            .entry((lemma.to_string(), tag.into()))
            .or_default()
            .push(form.to_string());
        self
    }
}

impl Inflector for ScriptedInflector {
    fn inflect(&self, lemma: &str, tag: &Tag) -> Result<Option<Vec<String>>, BoxError> {
        Ok(self.forms.get(&(lemma.to_string(), tag.clone())).cloned())
    }
}

/// Returns scripted beams per sentence; unscripted sentences are an error.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCommonsenseModel {
    beams: HashMap<String, CommonsenseObjectSet>,
}

impl ScriptedCommonsenseModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, text: &str, beams: CommonsenseObjectSet) -> Self {
        self.beams.insert(text.to_string(), beams);
        self
    }
}

impl CommonsenseModel for ScriptedCommonsenseModel {
    fn infer_relations(
        &self,
        text: &str,
        relations: &[RelationType],
    ) -> Result<CommonsenseObjectSet, BoxError> {
        let mut beams = self
            .beams
            .get(text)
            .cloned()
            .ok_or_else(|| format!("no scripted beams for '{}'", text))?;
        beams.retain_relations(relations);
        Ok(beams)
    }
}

/// Labels sentences from a script, with a default for everything else.
#[derive(Debug, Clone)]
pub struct ScriptedSentiment {
    labels: HashMap<String, SentimentLabel>,
    default: SentimentLabel,
}

impl ScriptedSentiment {
    pub fn new(default: impl Into<SentimentLabel>) -> Self {
        Self {
            labels: HashMap::new(),
            default: default.into(),
        }
    }

    pub fn with(mut self, text: &str, label: impl Into<SentimentLabel>) -> Self {
        self.labels.insert(text.to_string(), label.into());
        self
    }
}

impl SentimentClassifier for ScriptedSentiment {
    fn classify(&self, text: &str) -> Result<SentimentLabel, BoxError> {
        Ok(self.labels.get(text).unwrap_or(&self.default).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagger_prefers_scripted_sentences() {
        let tagger = ScriptedTagger::new()
            .with_sentence("Ben won", "Ben|PROPN|NNP won|VERB|VBD|win")
            .unwrap()
            .with_words("won|ADJ|JJ")
            .unwrap();

        let sentence = tagger.tag("Ben won").unwrap();
        assert_eq!(sentence.tokens()[1].pos, Pos::Verb);

        let sentence = tagger.tag("won it").unwrap();
        assert_eq!(sentence.tokens()[0].pos, Pos::Adj);
        assert_eq!(sentence.tokens()[1].pos, Pos::X);
        assert_eq!(sentence.tokens()[1].lemma, "it");
    }

    #[test]
    fn inflector_reports_missing_forms() {
        let inflector = ScriptedInflector::new().with("win", "VBZ", "wins");
        assert_eq!(
            inflector.first_inflection("win", &Tag::Vbz).unwrap(),
            Some("wins".to_string())
        );
        assert_eq!(inflector.first_inflection("win", &Tag::Vbd).unwrap(), None);
    }

    #[test]
    fn model_restricts_to_requested_relations() {
        let model = ScriptedCommonsenseModel::new().with(
            "Ben won",
            CommonsenseObjectSet::new()
                .with(RelationType::XAttr, ["strong"])
                .with(RelationType::OReact, ["happy"]),
        );

        let beams = model
            .infer_relations("Ben won", &RelationType::WORKING_SET)
            .unwrap();
        assert_eq!(beams.relations().collect::<Vec<_>>(), [RelationType::XAttr]);
        assert!(model.infer_relations("Ben lost", &[]).is_err());
    }
}
