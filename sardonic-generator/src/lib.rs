//! Explainable sarcastic response generation.
//!
//! [`SarcasmGenerator`] ties the pieces together: failed expectations from
//! `sardonic-expectation`, filtered commonsense from `sardonic-commonsense`,
//! and a [`ResponseGenerator`] that phrases the responses. Each response
//! records the expectation and relation it plays on, so it can be explained.
//!
//! [`process_events`] runs the pipeline over a file of events, writing JSON
//! Lines.

mod batch;
mod config;
mod error;
mod pipeline;
mod response;

pub use batch::{process_events, BatchSummary};
pub use config::GeneratorConfig;
pub use error::{ConfigError, GeneratorError, GeneratorResult};
pub use pipeline::{ResponsePipeline, SarcasmGenerator};
pub use response::{
    ExplainableSarcasticResponse, RelationSubject, ResponseGenerator, MAXIM_OF_QUALITY,
};
