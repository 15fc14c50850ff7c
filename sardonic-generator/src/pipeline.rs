use sardonic::{CommonsenseModel, Inflector, SentimentClassifier, SentimentScorer, Tagger};
use sardonic_commonsense::{CommonsenseBuilder, RankedSentiment};
use sardonic_expectation::ExpectationExtractor;
use tracing::instrument;

use crate::{
    ExplainableSarcasticResponse, GeneratorConfig, GeneratorError, GeneratorResult,
    ResponseGenerator,
};

/// Anything that turns an event into groups of sarcastic responses.
pub trait ResponsePipeline {
    /// One group per (failed expectation, repetition), in expectation order.
    fn generate_responses(
        &self,
        event: &str,
        num_responses: usize,
    ) -> GeneratorResult<Vec<Vec<ExplainableSarcasticResponse>>>;
}

/// Extract failed expectations, build commonsense for each, then ask the
/// response generator.
#[derive(Debug, Clone)]
pub struct SarcasmGenerator<T, I, M, U, C, R> {
    extractor: ExpectationExtractor<T, I>,
    builder: CommonsenseBuilder<M, U, C>,
    responder: R,
    use_antonyms: bool,
    num_responses: usize,
}

impl<T, I, M, U, C, R> SarcasmGenerator<T, I, M, U, C, R>
where
    T: Tagger,
    I: Inflector,
    M: CommonsenseModel,
    U: Tagger,
    C: SentimentClassifier,
    R: ResponseGenerator,
{
    pub fn new(
        extractor: ExpectationExtractor<T, I>,
        builder: CommonsenseBuilder<M, U, C>,
        responder: R,
    ) -> Self {
        Self {
            extractor,
            builder,
            responder,
            use_antonyms: true,
            num_responses: 1,
        }
    }

    pub fn with_antonyms(mut self, use_antonyms: bool) -> Self {
        self.use_antonyms = use_antonyms;
        self
    }

    /// Response groups produced per failed expectation by [`Self::generate`].
    pub fn with_num_responses(mut self, num_responses: usize) -> Self {
        self.num_responses = num_responses;
        self
    }

    pub fn num_responses(&self) -> usize {
        self.num_responses
    }

    /// [`ResponsePipeline::generate_responses`] with the configured count.
    pub fn generate(&self, event: &str) -> GeneratorResult<Vec<Vec<ExplainableSarcasticResponse>>> {
        self.generate_responses(event, self.num_responses)
    }

    pub fn extractor(&self) -> &ExpectationExtractor<T, I> {
        &self.extractor
    }

    pub fn builder(&self) -> &CommonsenseBuilder<M, U, C> {
        &self.builder
    }
}

impl<T, I, M, S, R> SarcasmGenerator<T, I, M, T, RankedSentiment<S>, R>
where
    T: Tagger + Clone,
    I: Inflector,
    M: CommonsenseModel,
    S: SentimentScorer,
    R: ResponseGenerator,
{
    /// Assemble the pipeline from configuration and model handles.
    ///
    /// The tagger serves both expectation extraction and object normalization.
    pub fn from_config(
        config: &GeneratorConfig,
        tagger: T,
        inflector: I,
        model: M,
        scorer: S,
        responder: R,
    ) -> GeneratorResult<Self> {
        let antonyms = config.antonyms()?;
        tracing::debug!(
            target: "sardonic_generator",
            antonyms = antonyms.len(),
            "loaded antonyms"
        );

        let extractor = ExpectationExtractor::new(tagger.clone(), inflector, antonyms);
        let classifier = RankedSentiment::with_excluded(scorer, config.excluded_labels());
        let builder = CommonsenseBuilder::with_relation_types(
            model,
            tagger,
            classifier,
            config.relation_types.iter().copied(),
        );
        Ok(Self::new(extractor, builder, responder)
            .with_antonyms(config.use_antonyms)
            .with_num_responses(config.num_responses))
    }
}

impl<T, I, M, U, C, R> ResponsePipeline for SarcasmGenerator<T, I, M, U, C, R>
where
    T: Tagger,
    I: Inflector,
    M: CommonsenseModel,
    U: Tagger,
    C: SentimentClassifier,
    R: ResponseGenerator,
{
    #[instrument(level = "debug", skip(self))]
    fn generate_responses(
        &self,
        event: &str,
        num_responses: usize,
    ) -> GeneratorResult<Vec<Vec<ExplainableSarcasticResponse>>> {
        tracing::info!(target: "sardonic_generator", "extracting expectations");
        let expectations = self.extractor.extract(event, self.use_antonyms)?;
        let total = expectations.len();
        tracing::info!(target: "sardonic_generator", "extracted {} expectations", total);

        let mut groups = Vec::with_capacity(total * num_responses);
        for (idx, failed_expectation) in expectations.iter().enumerate() {
            tracing::info!(
                target: "sardonic_generator",
                "Expectation {} / {}: building commonsense",
                idx + 1,
                total
            );
            let (commonsense, _raw) = self
                .builder
                .build(event, Some(failed_expectation.as_str()))?;

            tracing::info!(
                target: "sardonic_generator",
                "Expectation {} / {}: generating responses",
                idx + 1,
                total
            );
            for _ in 0..num_responses {
                let responses = self
                    .responder
                    .generate(event, failed_expectation, &commonsense)
                    .map_err(|source| GeneratorError::ResponseGenerator {
                        failed_expectation: failed_expectation.clone(),
                        source,
                    })?;
                groups.push(responses);
            }
        }
        Ok(groups)
    }
}
