//! Error types for the shared data model.

use thiserror::Error;

/// Error type returned by external collaborators (tagger, models, inflector).
///
/// Ports never interpret these; callers wrap them in a variant naming the
/// collaborator and keep the original as the `source`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while building the data model from text.
#[derive(Debug, Error)]
pub enum SardonicError {
    /// A POS name outside the Universal tag set.
    #[error("unknown part-of-speech tag: {0}")]
    UnknownPos(String),

    /// A relation name outside the closed relation set.
    #[error("unknown relation type: {0}")]
    UnknownRelation(String),

    /// A malformed `text|POS|TAG[|lemma]` annotation.
    #[error("bad token annotation at token {token}: {message}")]
    Annotation { token: usize, message: String },
}

/// Result type for data model operations.
pub type SardonicResult<T> = Result<T, SardonicError>;
