//! Part-of-speech tagged tokens and sentences.
//!
//! These are produced by an external [`Tagger`](crate::Tagger) and are only
//! ever read by the rule cascade and the commonsense normalizer.

mod display;

pub use display::TaggedSentenceDisplay;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::{SardonicError, SardonicResult};

/// Coarse-grained Universal POS tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Pos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Space,
    Sym,
    Verb,
    X,
}

impl Pos {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pos::Adj => "ADJ",
            Pos::Adp => "ADP",
            Pos::Adv => "ADV",
            Pos::Aux => "AUX",
            Pos::Cconj => "CCONJ",
            Pos::Det => "DET",
            Pos::Intj => "INTJ",
            Pos::Noun => "NOUN",
            Pos::Num => "NUM",
            Pos::Part => "PART",
            Pos::Pron => "PRON",
            Pos::Propn => "PROPN",
            Pos::Punct => "PUNCT",
            Pos::Sconj => "SCONJ",
            Pos::Space => "SPACE",
            Pos::Sym => "SYM",
            Pos::Verb => "VERB",
            Pos::X => "X",
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pos {
    type Err = SardonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ADJ" => Pos::Adj,
            "ADP" => Pos::Adp,
            "ADV" => Pos::Adv,
            "AUX" => Pos::Aux,
            "CCONJ" | "CONJ" => Pos::Cconj,
            "DET" => Pos::Det,
            "INTJ" => Pos::Intj,
            "NOUN" => Pos::Noun,
            "NUM" => Pos::Num,
            "PART" => Pos::Part,
            "PRON" => Pos::Pron,
            "PROPN" => Pos::Propn,
            "PUNCT" => Pos::Punct,
            "SCONJ" => Pos::Sconj,
            "SPACE" => Pos::Space,
            "SYM" => Pos::Sym,
            "VERB" => Pos::Verb,
            "X" => Pos::X,
            other => return Err(SardonicError::UnknownPos(other.to_string())),
        })
    }
}

/// Fine-grained Penn Treebank tag.
///
/// Tags outside the verb/noun/pronoun families the rules care about are kept
/// verbatim in [`Tag::Other`]. Equality and hashing go through the tag name,
/// so `Tag::Other("VBZ".into())` equals `Tag::Vbz`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Tag {
    /// Verb, base form
    Vb,
    /// Verb, past tense
    Vbd,
    /// Verb, gerund or present participle
    Vbg,
    /// Verb, past participle
    Vbn,
    /// Verb, non-3rd person singular present
    Vbp,
    /// Verb, 3rd person singular present
    Vbz,
    /// Modal
    Md,
    Nn,
    Nns,
    Nnp,
    Nnps,
    Prp,
    PrpPossessive,
    Jj,
    Rb,
    Dt,
    In,
    To,
    /// Any other tag name. Prefer [`Tag::from`], which maps known names to
    /// their own variants.
    Other(String),
}

impl Tag {
    pub fn as_str(&self) -> &str {
        match self {
            Tag::Vb => "VB",
            Tag::Vbd => "VBD",
            Tag::Vbg => "VBG",
            Tag::Vbn => "VBN",
            Tag::Vbp => "VBP",
            Tag::Vbz => "VBZ",
            Tag::Md => "MD",
            Tag::Nn => "NN",
            Tag::Nns => "NNS",
            Tag::Nnp => "NNP",
            Tag::Nnps => "NNPS",
            Tag::Prp => "PRP",
            Tag::PrpPossessive => "PRP$",
            Tag::Jj => "JJ",
            Tag::Rb => "RB",
            Tag::Dt => "DT",
            Tag::In => "IN",
            Tag::To => "TO",
            Tag::Other(name) => name.as_str(),
        }
    }

    /// Whether this is one of the six verb tags.
    pub fn is_verb(&self) -> bool {
        matches!(self.as_str(), "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ")
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        match s {
            "VB" => Tag::Vb,
            "VBD" => Tag::Vbd,
            "VBG" => Tag::Vbg,
            "VBN" => Tag::Vbn,
            "VBP" => Tag::Vbp,
            "VBZ" => Tag::Vbz,
            "MD" => Tag::Md,
            "NN" => Tag::Nn,
            "NNS" => Tag::Nns,
            "NNP" => Tag::Nnp,
            "NNPS" => Tag::Nnps,
            "PRP" => Tag::Prp,
            "PRP$" => Tag::PrpPossessive,
            "JJ" => Tag::Jj,
            "RB" => Tag::Rb,
            "DT" => Tag::Dt,
            "IN" => Tag::In,
            "TO" => Tag::To,
            other => Tag::Other(other.to_string()),
        }
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        Tag::from(s.as_str())
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.as_str().to_string()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lemma a tagger assigns to personal pronouns instead of a real lemma.
pub const PRONOUN_LEMMA: &str = "-PRON-";

/// A single token as produced by the tagger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub text: String,
    pub lemma: String,
    pub pos: Pos,
    pub tag: Tag,
}

impl TaggedToken {
    pub fn new(
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: Pos,
        tag: impl Into<Tag>,
    ) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            tag: tag.into(),
        }
    }

    /// True when the tagger gave this token a usable lemma.
    pub fn has_real_lemma(&self) -> bool {
        self.lemma != PRONOUN_LEMMA
    }
}

/// An ordered run of tagged tokens. Token 0 is taken to be the subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaggedSentence {
    tokens: Vec<TaggedToken>,
}

impl TaggedSentence {
    pub fn new(tokens: Vec<TaggedToken>) -> Self {
        Self { tokens }
    }

    /// Parse the compact annotation format used by fixtures and test doubles.
    ///
    /// Tokens are separated by whitespace and written as `text|POS|TAG` or
    /// `text|POS|TAG|lemma`. A missing lemma defaults to the lower-cased text.
    ///
    /// ```
    /// use sardonic::{Pos, Tag, TaggedSentence};
    ///
    /// let sentence = TaggedSentence::from_annotated("Ben|PROPN|NNP wins|VERB|VBZ|win").unwrap();
    /// assert_eq!(sentence.len(), 2);
    /// assert_eq!(sentence.tokens()[1].pos, Pos::Verb);
    /// assert_eq!(sentence.tokens()[1].tag, Tag::Vbz);
    /// assert_eq!(sentence.tokens()[1].lemma, "win");
    /// ```
    pub fn from_annotated(input: &str) -> SardonicResult<Self> {
        input
            .split_whitespace()
            .enumerate()
            .map(|(idx, chunk)| {
                let mut parts = chunk.split('|');
                let (text, pos, tag) = match (parts.next(), parts.next(), parts.next()) {
                    (Some(text), Some(pos), Some(tag)) if !text.is_empty() => (text, pos, tag),
                    _ => {
                        return Err(SardonicError::Annotation {
                            token: idx,
                            message: format!("expected text|POS|TAG, found '{}'", chunk),
                        })
                    }
                };
                let lemma = parts
                    .next()
                    .map(str::to_string)
                    .unwrap_or_else(|| text.to_lowercase());
                if parts.next().is_some() {
                    return Err(SardonicError::Annotation {
                        token: idx,
                        message: format!("too many fields in '{}'", chunk),
                    });
                }
                Ok(TaggedToken::new(text, lemma, pos.parse()?, tag))
            })
            .collect::<SardonicResult<Vec<_>>>()
            .map(Self::new)
    }

    pub fn tokens(&self) -> &[TaggedToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&TaggedToken> {
        self.tokens.get(idx)
    }

    /// The sentential subject (token 0), if any.
    pub fn subject(&self) -> Option<&TaggedToken> {
        self.tokens.first()
    }

    /// Surface texts of the tokens from `start` onwards. Empty past the end.
    pub fn texts_from(&self, start: usize) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .skip(start)
            .map(|token| token.text.as_str())
    }

    /// Space-joined surface text.
    pub fn text(&self) -> String {
        self.texts_from(0).collect::<Vec<_>>().join(" ")
    }
}

impl From<Vec<TaggedToken>> for TaggedSentence {
    fn from(tokens: Vec<TaggedToken>) -> Self {
        Self::new(tokens)
    }
}

impl<'a> IntoIterator for &'a TaggedSentence {
    type Item = &'a TaggedToken;
    type IntoIter = std::slice::Iter<'a, TaggedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
