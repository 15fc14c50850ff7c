//! Error types for commonsense building.

use sardonic::BoxError;
use thiserror::Error;

/// A collaborator failed while building or filtering commonsense objects.
#[derive(Debug, Error)]
pub enum CommonsenseError {
    /// The tagger failed while normalizing an object.
    #[error("tagger failed on '{text}'")]
    Tagger {
        text: String,
        #[source]
        source: BoxError,
    },

    /// The commonsense model failed on an input sentence.
    #[error("commonsense model failed on '{text}'")]
    Model {
        text: String,
        #[source]
        source: BoxError,
    },

    /// The sentiment classifier failed on a synthesized sentence.
    #[error("sentiment classifier failed on '{text}'")]
    Sentiment {
        text: String,
        #[source]
        source: BoxError,
    },
}

pub type CommonsenseResult<T> = Result<T, CommonsenseError>;
