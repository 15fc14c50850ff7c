//! The expectation rule cascade.
//!
//! Five rules are tried in a fixed order against the tokens after the
//! subject. The first rule whose pattern matches generates the expectations
//! and the cascade stops there.

use once_cell::sync::Lazy;
use sardonic::{Inflector, Pos, Tag, TaggedSentence, TaggedToken};

use crate::{
    AntonymTable, ExpectationError, ExpectationResult, Slot, TokenConstraint, TokenPattern,
};

const NOT: &str = "not";

/// `(AUX VBZ | AUX VBD)`
fn aux_slot() -> Slot {
    Slot::any_of([
        TokenConstraint::pos_tag(Pos::Aux, Tag::Vbz),
        TokenConstraint::pos_tag(Pos::Aux, Tag::Vbd),
    ])
}

/// `(is AUX VBZ | was AUX VBD)`
fn copula_slot() -> Slot {
    Slot::any_of([
        TokenConstraint::pos_tag(Pos::Aux, Tag::Vbz).with_text("is"),
        TokenConstraint::pos_tag(Pos::Aux, Tag::Vbd).with_text("was"),
    ])
}

/// `(not | n't)`
fn negation_slot() -> Slot {
    Slot::any_of([TokenConstraint::text(NOT), TokenConstraint::text("n't")])
}

/// `VERB VB`
fn base_verb_slot() -> Slot {
    Slot::one(TokenConstraint::pos_tag(Pos::Verb, Tag::Vb))
}

static AUX_NOT_VERB: Lazy<TokenPattern> =
    Lazy::new(|| TokenPattern::new([aux_slot(), negation_slot(), base_verb_slot()]));

static AUX_VERB: Lazy<TokenPattern> =
    Lazy::new(|| TokenPattern::new([aux_slot(), base_verb_slot()]));

static COPULA_NOT: Lazy<TokenPattern> =
    Lazy::new(|| TokenPattern::new([copula_slot(), negation_slot()]));

static COPULA: Lazy<TokenPattern> = Lazy::new(|| TokenPattern::new([copula_slot()]));

static BARE_VERB: Lazy<TokenPattern> = Lazy::new(|| {
    TokenPattern::new([Slot::any_of([
        TokenConstraint::pos_tag(Pos::Verb, Tag::Vbz),
        TokenConstraint::pos_tag(Pos::Verb, Tag::Vbd),
        TokenConstraint::pos_tag(Pos::Verb, Tag::Vbp),
    ])])
});

/// One rule of the cascade, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpectationRule {
    /// "Ben does not win marathons"
    AuxNotVerb,
    /// "Ben does win marathons"
    AuxVerb,
    /// "Ben is not winning marathons"
    CopulaNot,
    /// "Ben is winning marathons"
    Copula,
    /// "Ben wins marathons"
    BareVerb,
}

impl ExpectationRule {
    /// Every rule, highest priority first.
    pub const CASCADE: [ExpectationRule; 5] = [
        Self::AuxNotVerb,
        Self::AuxVerb,
        Self::CopulaNot,
        Self::Copula,
        Self::BareVerb,
    ];

    /// Pattern tested against the tokens after the subject.
    pub fn pattern(&self) -> &'static TokenPattern {
        match self {
            Self::AuxNotVerb => &*AUX_NOT_VERB,
            Self::AuxVerb => &*AUX_VERB,
            Self::CopulaNot => &*COPULA_NOT,
            Self::Copula => &*COPULA,
            Self::BareVerb => &*BARE_VERB,
        }
    }

    /// The single rule that fires for `sentence`, if any.
    pub fn matching(sentence: &TaggedSentence) -> Option<Self> {
        let predicate = sentence.tokens().get(1..)?;
        Self::CASCADE
            .iter()
            .copied()
            .find(|rule| rule.pattern().matches(predicate))
    }

    fn generate<I: Inflector>(&self, ctx: &RuleContext<'_, I>) -> ExpectationResult<Vec<String>> {
        match self {
            Self::AuxNotVerb => ctx.aux_not_verb(),
            Self::AuxVerb => ctx.aux_verb(),
            Self::CopulaNot => Ok(ctx.copula_not()),
            Self::Copula => Ok(ctx.copula()),
            Self::BareVerb => ctx.bare_verb(),
        }
    }
}

/// Derive failed expectations from a tagged event.
///
/// Token 0 is copied verbatim as the subject of every expectation. A sentence
/// no rule matches yields an empty list; a sentence with nothing after the
/// subject is [`ExpectationError::InputTooShort`].
pub fn extract_expectations<I: Inflector>(
    sentence: &TaggedSentence,
    antonyms: &AntonymTable,
    inflector: &I,
    use_antonyms: bool,
) -> ExpectationResult<Vec<String>> {
    if sentence.len() < 2 {
        return Err(ExpectationError::InputTooShort {
            len: sentence.len(),
        });
    }

    let rule = match ExpectationRule::matching(sentence) {
        Some(rule) => rule,
        None => {
            tracing::debug!(
                target: "sardonic_expectation",
                event = %sentence.text(),
                "no expectation rule matched"
            );
            return Ok(Vec::new());
        }
    };

    let ctx = RuleContext {
        sentence,
        antonyms,
        inflector,
        use_antonyms,
    };
    let expectations = rule.generate(&ctx)?;
    tracing::debug!(
        target: "sardonic_expectation",
        ?rule,
        count = expectations.len(),
        "expectation rule fired"
    );
    Ok(expectations)
}

struct RuleContext<'a, I> {
    sentence: &'a TaggedSentence,
    antonyms: &'a AntonymTable,
    inflector: &'a I,
    use_antonyms: bool,
}

impl<'a, I: Inflector> RuleContext<'a, I> {
    fn token(&self, idx: usize) -> &'a TaggedToken {
        // Rules only index positions their pattern has already matched.
        &self.sentence.tokens()[idx]
    }

    fn subject(&self) -> &'a str {
        &self.token(0).text
    }

    fn antonym(&self, lemma: &str) -> Option<&'a str> {
        if self.use_antonyms {
            self.antonyms.get(lemma)
        } else {
            None
        }
    }

    fn inflect(&self, lemma: &str, tag: &Tag) -> ExpectationResult<Option<String>> {
        self.inflector
            .first_inflection(lemma, tag)
            .map_err(|source| ExpectationError::Inflector {
                lemma: lemma.to_string(),
                source,
            })
    }

    /// `head` followed by the surface text of tokens `rest_from..`.
    fn sentence_with(&self, head: &[&str], rest_from: usize) -> String {
        head.iter()
            .copied()
            .chain(self.sentence.texts_from(rest_from))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn aux_not_verb(&self) -> ExpectationResult<Vec<String>> {
        let subject = self.subject();
        let aux = self.token(1);
        let verb = self.token(3);
        let mut expectations = Vec::new();

        // Ben wins marathons
        if let Some(form) = self.inflect(&verb.lemma, &aux.tag)? {
            expectations.push(self.sentence_with(&[subject, &form], 4));
        }

        // Ben does win marathons
        expectations.push(self.sentence_with(&[subject, &aux.text, &verb.lemma], 4));

        // Ben does not lose marathons
        if let Some(antonym) = self.antonym(&verb.lemma) {
            expectations.push(self.sentence_with(&[subject, &aux.text, NOT, antonym], 4));
        }

        Ok(expectations)
    }

    fn aux_verb(&self) -> ExpectationResult<Vec<String>> {
        let subject = self.subject();
        let aux = self.token(1);
        let verb = self.token(2);

        // Ben does not win marathons
        let mut expectations = vec![self.sentence_with(&[subject, &aux.text, NOT, &verb.lemma], 3)];

        if let Some(antonym) = self.antonym(&verb.lemma) {
            // Ben does lose marathons
            expectations.push(self.sentence_with(&[subject, &aux.text, antonym], 3));

            // Ben loses marathons
            if let Some(form) = self.inflect(antonym, &aux.tag)? {
                expectations.push(self.sentence_with(&[subject, &form], 3));
            }
        }

        Ok(expectations)
    }

    /// Drops the negation; the rest starts after it.
    fn copula_not(&self) -> Vec<String> {
        vec![self.sentence_with(&[self.subject(), &self.token(1).text], 3)]
    }

    fn copula(&self) -> Vec<String> {
        vec![self.sentence_with(&[self.subject(), &self.token(1).text, NOT], 2)]
    }

    fn bare_verb(&self) -> ExpectationResult<Vec<String>> {
        let subject = self.subject();
        let verb = self.token(1);
        let aux = if verb.tag == Tag::Vbz { "does" } else { "did" };

        // Ben does not win marathons
        let mut expectations = vec![self.sentence_with(&[subject, aux, NOT, &verb.lemma], 2)];

        // Ben loses marathons
        if let Some(antonym) = self.antonym(&verb.lemma) {
            if let Some(form) = self.inflect(antonym, &verb.tag)? {
                expectations.push(self.sentence_with(&[subject, &form], 2));
            }
        }

        Ok(expectations)
    }
}
