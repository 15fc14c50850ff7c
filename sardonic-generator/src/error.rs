//! Error types for the response pipeline.

use std::io;

use sardonic::BoxError;
use sardonic_commonsense::CommonsenseError;
use sardonic_expectation::{AntonymError, ExpectationError};
use thiserror::Error;

/// Errors that can occur while loading a [`GeneratorConfig`](crate::GeneratorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors that can occur while generating responses.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Antonyms(#[from] AntonymError),

    #[error("expectation extraction failed")]
    Expectation(#[from] ExpectationError),

    #[error("commonsense building failed")]
    Commonsense(#[from] CommonsenseError),

    /// The response generator failed for a failed expectation.
    #[error("response generator failed for '{failed_expectation}'")]
    ResponseGenerator {
        failed_expectation: String,
        #[source]
        source: BoxError,
    },

    #[error("i/o error")]
    Io(#[from] io::Error),

    #[error("could not serialize responses")]
    Json(#[from] serde_json::Error),
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;
