//! Shared data model for expectation-based sarcasm generation.
//!
//! This crate holds the types every stage of the pipeline reads and the
//! ports through which the pipeline drives its external models.
//!
//! ## Data model
//!
//! - [`TaggedToken`] / [`TaggedSentence`] - tagger output, token 0 is the subject
//! - [`Pos`] / [`Tag`] - coarse and fine part-of-speech tags as closed enums
//! - [`RelationType`] - the closed set of if-then commonsense relations
//! - [`CommonsenseObjectSet`] - beam-ordered objects per relation
//! - [`CommonsenseBuilderResponse`] - event and failed-expectation objects
//!
//! ## Ports
//!
//! - [`Tagger`], [`Inflector`], [`CommonsenseModel`], [`SentimentClassifier`],
//!   [`SentimentScorer`]
//!
//! The [`scripted`] module provides deterministic doubles for all of them.
//!
//! ## Example
//!
//! ```
//! use sardonic::{TaggedSentence, TaggedSentenceDisplay};
//!
//! let sentence = TaggedSentence::from_annotated("Ben|PROPN|NNP wins|VERB|VBZ|win").unwrap();
//! println!("{}", TaggedSentenceDisplay::new(&sentence));
//! ```

mod error;
mod ports;
mod relation;
pub mod scripted;
mod tagged;

pub use error::{BoxError, SardonicError, SardonicResult};
pub use ports::{
    CommonsenseModel, Inflector, SentimentClassifier, SentimentLabel, SentimentScorer, Tagger,
};
pub use relation::{CommonsenseBuilderResponse, CommonsenseObjectSet, RelationType};
pub use tagged::{Pos, Tag, TaggedSentence, TaggedSentenceDisplay, TaggedToken, PRONOUN_LEMMA};
