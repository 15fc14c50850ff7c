//! Failed-expectation extraction for sardonic.
//!
//! Given an event such as "Ben wins marathons", this crate derives sentences
//! describing what was expected instead: its negation ("Ben does not win
//! marathons") or an antonymic alternative ("Ben loses marathons").
//!
//! ## Components
//!
//! - [`TokenPattern`] - positional sum-of-products patterns over tagged tokens
//! - [`AntonymTable`] - bidirectional antonyms loaded from a TSV resource
//! - [`ExpectationRule`] / [`extract_expectations`] - the five-rule cascade
//! - [`ExpectationExtractor`] - tagger + cascade over raw text
//!
//! ## Example
//!
//! ```
//! use sardonic::scripted::ScriptedInflector;
//! use sardonic::TaggedSentence;
//! use sardonic_expectation::{extract_expectations, AntonymTable};
//!
//! let sentence = TaggedSentence::from_annotated(
//!     "Ben|PROPN|NNP wins|VERB|VBZ|win marathons|NOUN|NNS|marathon",
//! ).unwrap();
//! let antonyms: AntonymTable = [("win", "lose")].into_iter().collect();
//! let inflector = ScriptedInflector::new().with("lose", "VBZ", "loses");
//!
//! let expectations = extract_expectations(&sentence, &antonyms, &inflector, true).unwrap();
//! assert_eq!(expectations, ["Ben does not win marathons", "Ben loses marathons"]);
//! ```

mod antonym;
mod cascade;
mod error;
mod extractor;
mod pattern;

pub use antonym::AntonymTable;
pub use cascade::{extract_expectations, ExpectationRule};
pub use error::{AntonymError, ExpectationError, ExpectationResult};
pub use extractor::ExpectationExtractor;
pub use pattern::{Slot, TokenConstraint, TokenPattern};
