//! Capability interfaces for the external models this crate family drives.
//!
//! Nothing in the workspace ships a real model; production callers implement
//! these traits over their tagger, COMET-style generator, and classifier.
//! All calls are blocking and stateless from the caller's point of view.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{BoxError, CommonsenseObjectSet, RelationType, Tag, TaggedSentence};

/// Turns raw text into tagged tokens.
pub trait Tagger {
    fn tag(&self, text: &str) -> Result<TaggedSentence, BoxError>;
}

/// Conjugates a lemma into the form for a fine tag.
pub trait Inflector {
    /// `Ok(None)` or an empty list means the lemma has no such form.
    fn inflect(&self, lemma: &str, tag: &Tag) -> Result<Option<Vec<String>>, BoxError>;

    /// First inflected form, if any.
    fn first_inflection(&self, lemma: &str, tag: &Tag) -> Result<Option<String>, BoxError> {
        Ok(self
            .inflect(lemma, tag)?
            .and_then(|forms| forms.into_iter().next()))
    }
}

/// Generates beams of relation objects for a sentence.
pub trait CommonsenseModel {
    /// Beams may contain the sentinel `"none"`; callers filter it.
    fn infer_relations(
        &self,
        text: &str,
        relations: &[RelationType],
    ) -> Result<CommonsenseObjectSet, BoxError>;
}

/// A classifier-defined sentiment label such as `positive` or `negative`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentimentLabel(pub String);

impl SentimentLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SentimentLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// Labels a sentence's polarity.
pub trait SentimentClassifier {
    fn classify(&self, text: &str) -> Result<SentimentLabel, BoxError>;
}

/// Scores every label of a sentiment model for a sentence.
pub trait SentimentScorer {
    /// One `(label, score)` per label, in any order.
    fn scores(&self, text: &str) -> Result<Vec<(SentimentLabel, f64)>, BoxError>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn tag(&self, text: &str) -> Result<TaggedSentence, BoxError> {
        (**self).tag(text)
    }
}

impl<T: Inflector + ?Sized> Inflector for &T {
    fn inflect(&self, lemma: &str, tag: &Tag) -> Result<Option<Vec<String>>, BoxError> {
        (**self).inflect(lemma, tag)
    }
}

impl<T: CommonsenseModel + ?Sized> CommonsenseModel for &T {
    fn infer_relations(
        &self,
        text: &str,
        relations: &[RelationType],
    ) -> Result<CommonsenseObjectSet, BoxError> {
        (**self).infer_relations(text, relations)
    }
}

impl<T: SentimentClassifier + ?Sized> SentimentClassifier for &T {
    fn classify(&self, text: &str) -> Result<SentimentLabel, BoxError> {
        (**self).classify(text)
    }
}
