//! Positional token patterns.
//!
//! A [`TokenPattern`] is a sum-of-products over token attributes: each slot
//! is a disjunction of [`TokenConstraint`]s, and each constraint is a
//! conjunction of the attributes it sets.

use sardonic::{Pos, Tag, TaggedToken};

/// Attribute constraints that must all hold for a single token.
///
/// Unset attributes are unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenConstraint {
    pub text: Option<&'static str>,
    pub pos: Option<Pos>,
    pub tag: Option<Tag>,
}

impl TokenConstraint {
    /// Constrain coarse and fine tag.
    pub fn pos_tag(pos: Pos, tag: Tag) -> Self {
        Self {
            text: None,
            pos: Some(pos),
            tag: Some(tag),
        }
    }

    /// Constrain surface text only.
    pub fn text(text: &'static str) -> Self {
        Self {
            text: Some(text),
            pos: None,
            tag: None,
        }
    }

    /// Additionally constrain surface text.
    pub fn with_text(mut self, text: &'static str) -> Self {
        self.text = Some(text);
        self
    }

    pub fn holds(&self, token: &TaggedToken) -> bool {
        self.text.map_or(true, |text| token.text == text)
            && self.pos.map_or(true, |pos| token.pos == pos)
            && self.tag.as_ref().map_or(true, |tag| token.tag == *tag)
    }
}

/// One position of a pattern: matches if any alternative holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    alternatives: Vec<TokenConstraint>,
}

impl Slot {
    pub fn any_of(alternatives: impl IntoIterator<Item = TokenConstraint>) -> Self {
        Self {
            alternatives: alternatives.into_iter().collect(),
        }
    }

    pub fn one(constraint: TokenConstraint) -> Self {
        Self::any_of([constraint])
    }

    pub fn alternatives(&self) -> &[TokenConstraint] {
        &self.alternatives
    }

    /// Index of the first alternative, in declared order, that holds.
    pub fn matching_alternative(&self, token: &TaggedToken) -> Option<usize> {
        self.alternatives
            .iter()
            .position(|constraint| constraint.holds(token))
    }

    pub fn matches(&self, token: &TaggedToken) -> bool {
        self.matching_alternative(token).is_some()
    }
}

/// An ordered list of slots matched against consecutive tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPattern {
    slots: Vec<Slot>,
}

impl TokenPattern {
    pub fn new(slots: impl IntoIterator<Item = Slot>) -> Self {
        Self {
            slots: slots.into_iter().collect(),
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of tokens the pattern consumes.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether `tokens` starts with a run matching every slot.
    ///
    /// Tokens past the last slot are ignored; fewer tokens than slots never match.
    pub fn matches(&self, tokens: &[TaggedToken]) -> bool {
        tokens.len() >= self.slots.len()
            && self
                .slots
                .iter()
                .zip(tokens)
                .all(|(slot, token)| slot.matches(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sardonic::TaggedSentence;

    fn aux_present_or_past() -> Slot {
        Slot::any_of([
            TokenConstraint::pos_tag(Pos::Aux, Tag::Vbz),
            TokenConstraint::pos_tag(Pos::Aux, Tag::Vbd),
        ])
    }

    #[test]
    fn slot_is_a_disjunction_of_conjunctions() {
        let sentence =
            TaggedSentence::from_annotated("does|AUX|VBZ|do did|AUX|VBD|do do|AUX|VBP wins|VERB|VBZ|win")
                .unwrap();
        let slot = aux_present_or_past();

        assert_eq!(slot.matching_alternative(&sentence.tokens()[0]), Some(0));
        assert_eq!(slot.matching_alternative(&sentence.tokens()[1]), Some(1));
        assert!(!slot.matches(&sentence.tokens()[2]));
        assert!(!slot.matches(&sentence.tokens()[3]));
    }

    #[test]
    fn literal_text_narrows_a_constraint() {
        let sentence = TaggedSentence::from_annotated("is|AUX|VBZ|be has|AUX|VBZ|have").unwrap();
        let is = TokenConstraint::pos_tag(Pos::Aux, Tag::Vbz).with_text("is");

        assert!(is.holds(&sentence.tokens()[0]));
        assert!(!is.holds(&sentence.tokens()[1]));
    }

    #[test]
    fn pattern_needs_enough_tokens() {
        let pattern = TokenPattern::new([
            aux_present_or_past(),
            Slot::any_of([TokenConstraint::text("not"), TokenConstraint::text("n't")]),
        ]);
        let full = TaggedSentence::from_annotated("does|AUX|VBZ|do n't|PART|RB|not win|VERB|VB")
            .unwrap();
        let short = TaggedSentence::from_annotated("does|AUX|VBZ|do").unwrap();

        assert_eq!(pattern.len(), 2);
        assert!(pattern.matches(full.tokens()));
        assert!(!pattern.matches(short.tokens()));
        assert!(!pattern.matches(&full.tokens()[1..]));
    }

    #[test]
    fn empty_pattern_matches_anything() {
        let pattern = TokenPattern::new([]);
        assert!(pattern.is_empty());
        assert!(pattern.matches(&[]));
    }
}
