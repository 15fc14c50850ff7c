use sardonic::{
    CommonsenseBuilderResponse, CommonsenseModel, CommonsenseObjectSet, RelationType,
    SentimentClassifier, Tagger,
};
use tracing::instrument;

use crate::{remove_overlap, CommonsenseError, CommonsenseResult};

/// Queries a commonsense model for an event and its failed expectation, then
/// filters the beams.
#[derive(Debug, Clone)]
pub struct CommonsenseBuilder<M, T, C> {
    model: M,
    tagger: T,
    classifier: C,
    relation_types: Vec<RelationType>,
}

impl<M, T, C> CommonsenseBuilder<M, T, C>
where
    M: CommonsenseModel,
    T: Tagger,
    C: SentimentClassifier,
{
    /// A builder over [`RelationType::WORKING_SET`].
    pub fn new(model: M, tagger: T, classifier: C) -> Self {
        Self::with_relation_types(model, tagger, classifier, RelationType::WORKING_SET)
    }

    pub fn with_relation_types(
        model: M,
        tagger: T,
        classifier: C,
        relation_types: impl IntoIterator<Item = RelationType>,
    ) -> Self {
        let mut relation_types: Vec<RelationType> = relation_types.into_iter().collect();
        relation_types.sort();
        relation_types.dedup();
        Self {
            model,
            tagger,
            classifier,
            relation_types,
        }
    }

    pub fn relation_types(&self) -> &[RelationType] {
        &self.relation_types
    }

    /// Returns `(filtered, raw)`.
    ///
    /// The raw response holds the beams as the model produced them. Both
    /// responses carry the expectation side only when it survived filtering.
    #[instrument(level = "debug", skip(self))]
    pub fn build(
        &self,
        event: &str,
        failed_expectation: Option<&str>,
    ) -> CommonsenseResult<(CommonsenseBuilderResponse, CommonsenseBuilderResponse)> {
        let event_objects = self.infer(event)?;
        let raw_event = event_objects.clone();

        let expectation_objects = match failed_expectation {
            Some(text) => Some(self.infer(text)?),
            None => None,
        };
        let raw_expectation = expectation_objects.clone();

        let (event_objects, expectation_objects) = remove_overlap(
            event_objects,
            expectation_objects,
            &self.tagger,
            &self.classifier,
        )?;

        tracing::debug!(
            target: "sardonic_commonsense",
            raw = raw_event.object_count(),
            kept = event_objects.object_count(),
            "filtered event objects"
        );

        match expectation_objects {
            Some(expectation_objects) => {
                tracing::debug!(
                    target: "sardonic_commonsense",
                    kept = expectation_objects.object_count(),
                    "filtered expectation objects"
                );
                Ok((
                    CommonsenseBuilderResponse::new(event_objects, Some(expectation_objects)),
                    CommonsenseBuilderResponse::new(raw_event, raw_expectation),
                ))
            }
            None => {
                if failed_expectation.is_some() {
                    tracing::debug!(target: "sardonic_commonsense", "expectation side dropped");
                }
                Ok((
                    CommonsenseBuilderResponse::new(event_objects, None),
                    CommonsenseBuilderResponse::new(raw_event, None),
                ))
            }
        }
    }

    fn infer(&self, text: &str) -> CommonsenseResult<CommonsenseObjectSet> {
        let mut beams = self
            .model
            .infer_relations(text, &self.relation_types)
            .map_err(|source| CommonsenseError::Model {
                text: text.to_string(),
                source,
            })?;
        beams.retain_relations(&self.relation_types);
        Ok(beams)
    }
}
