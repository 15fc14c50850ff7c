//! Error types for expectation extraction.

use sardonic::BoxError;
use thiserror::Error;

/// Errors that can occur while deriving expectations from an event.
///
/// An event that no rule matches is not an error; it yields no expectations.
#[derive(Debug, Error)]
pub enum ExpectationError {
    /// The sentence has no token after the subject.
    #[error("event needs a subject and at least one more token, found {len} token(s)")]
    InputTooShort { len: usize },

    /// The tagger failed on the event text.
    #[error("tagger failed")]
    Tagger(#[source] BoxError),

    /// The inflector failed on a lemma.
    #[error("inflector failed for '{lemma}'")]
    Inflector {
        lemma: String,
        #[source]
        source: BoxError,
    },
}

/// Errors that can occur while loading an antonym table.
#[derive(Debug, Error)]
pub enum AntonymError {
    /// The resource file could not be read.
    #[error("failed to load antonyms: {path}: {message}")]
    Load { path: String, message: String },

    /// A line is not `words<TAB>antonyms`.
    #[error("antonym parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type ExpectationResult<T> = Result<T, ExpectationError>;
