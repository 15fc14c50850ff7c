//! Pipeline output and the response-generation port.

use serde::{Deserialize, Serialize};

use sardonic::{BoxError, CommonsenseBuilderResponse, RelationType};

/// Norm every generated response violates.
pub const MAXIM_OF_QUALITY: &str = "maxim of quality";

/// Which side of the contrast a response's relation object comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationSubject {
    Event,
    FailedExpectation,
}

/// A sarcastic response together with what makes it sarcastic.
///
/// The relation fields say which commonsense inference the response plays
/// on; `failed_expectation` is what should have happened instead of the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainableSarcasticResponse {
    pub event: String,
    pub failed_expectation: String,
    pub relation_type: RelationType,
    pub relation_subject: RelationSubject,
    pub relation_object: String,
    pub norm_violated: String,
    pub response_texts: Vec<String>,
}

impl ExplainableSarcasticResponse {
    /// A response violating the [maxim of quality](MAXIM_OF_QUALITY).
    pub fn new(
        event: impl Into<String>,
        failed_expectation: impl Into<String>,
        relation_type: RelationType,
        relation_subject: RelationSubject,
        relation_object: impl Into<String>,
        response_texts: Vec<String>,
    ) -> Self {
        Self {
            event: event.into(),
            failed_expectation: failed_expectation.into(),
            relation_type,
            relation_subject,
            relation_object: relation_object.into(),
            norm_violated: MAXIM_OF_QUALITY.to_string(),
            response_texts,
        }
    }
}

/// Turns filtered commonsense into response texts.
pub trait ResponseGenerator {
    fn generate(
        &self,
        event: &str,
        failed_expectation: &str,
        commonsense: &CommonsenseBuilderResponse,
    ) -> Result<Vec<ExplainableSarcasticResponse>, BoxError>;
}

impl<T: ResponseGenerator + ?Sized> ResponseGenerator for &T {
    fn generate(
        &self,
        event: &str,
        failed_expectation: &str,
        commonsense: &CommonsenseBuilderResponse,
    ) -> Result<Vec<ExplainableSarcasticResponse>, BoxError> {
        (**self).generate(event, failed_expectation, commonsense)
    }
}
