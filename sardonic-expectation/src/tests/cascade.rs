use sardonic::scripted::ScriptedInflector;
use sardonic::{BoxError, Inflector, Tag, TaggedSentence};

use crate::{extract_expectations, AntonymTable, ExpectationError};

fn inflector() -> ScriptedInflector {
    ScriptedInflector::new()
        .with("win", "VBZ", "wins")
        .with("win", "VBD", "won")
        .with("lose", "VBZ", "loses")
        .with("lose", "VBD", "lost")
}

fn antonyms() -> AntonymTable {
    AntonymTable::from_tsv_str("win\tlose\n").unwrap()
}

fn expectations_with(annotated: &str, use_antonyms: bool) -> Vec<String> {
    let sentence = TaggedSentence::from_annotated(annotated).unwrap();
    extract_expectations(&sentence, &antonyms(), &inflector(), use_antonyms).unwrap()
}

fn expectations(annotated: &str) -> Vec<String> {
    expectations_with(annotated, true)
}

#[test]
fn aux_not_verb_present() {
    insta::assert_debug_snapshot!(expectations(
        "Ben|PROPN|NNP does|AUX|VBZ|do not|PART|RB win|VERB|VB marathons|NOUN|NNS|marathon"
    ), @r###"
    [
        "Ben wins marathons",
        "Ben does win marathons",
        "Ben does not lose marathons",
    ]
    "###);
}

#[test]
fn aux_not_verb_past() {
    insta::assert_debug_snapshot!(expectations(
        "Ben|PROPN|NNP did|AUX|VBD|do not|PART|RB win|VERB|VB marathons|NOUN|NNS|marathon"
    ), @r###"
    [
        "Ben won marathons",
        "Ben did win marathons",
        "Ben did not lose marathons",
    ]
    "###);
}

#[test]
fn aux_contracted_negation() {
    insta::assert_debug_snapshot!(expectations(
        "Ben|PROPN|NNP does|AUX|VBZ|do n't|PART|RB|not win|VERB|VB"
    ), @r###"
    [
        "Ben wins",
        "Ben does win",
        "Ben does not lose",
    ]
    "###);
}

#[test]
fn aux_not_verb_without_antonyms() {
    assert_eq!(
        expectations_with(
            "Ben|PROPN|NNP does|AUX|VBZ|do not|PART|RB win|VERB|VB marathons|NOUN|NNS|marathon",
            false
        ),
        ["Ben wins marathons", "Ben does win marathons"]
    );
}

#[test]
fn aux_not_verb_without_inflection() {
    // No inflection for "zorp" and no antonym: only the bare-auxiliary form survives.
    assert_eq!(
        expectations("Ben|PROPN|NNP did|AUX|VBD|do not|PART|RB zorp|VERB|VB it|PRON|PRP"),
        ["Ben did zorp it"]
    );
}

#[test]
fn aux_verb() {
    insta::assert_debug_snapshot!(expectations(
        "Ben|PROPN|NNP does|AUX|VBZ|do win|VERB|VB marathons|NOUN|NNS|marathon"
    ), @r###"
    [
        "Ben does not win marathons",
        "Ben does lose marathons",
        "Ben loses marathons",
    ]
    "###);

    assert_eq!(
        expectations_with(
            "Ben|PROPN|NNP did|AUX|VBD|do win|VERB|VB marathons|NOUN|NNS|marathon",
            false
        ),
        ["Ben did not win marathons"]
    );
}

#[test]
fn copula_with_negation() {
    assert_eq!(
        expectations(
            "Ben|PROPN|NNP was|AUX|VBD|be not|PART|RB winning|VERB|VBG|win marathons|NOUN|NNS|marathon"
        ),
        ["Ben was winning marathons"]
    );
    assert_eq!(
        expectations(
            "Ben|PROPN|NNP is|AUX|VBZ|be n't|PART|RB|not winning|VERB|VBG|win marathons|NOUN|NNS|marathon"
        ),
        ["Ben is winning marathons"]
    );
}

#[test]
fn copula() {
    assert_eq!(
        expectations(
            "Ben|PROPN|NNP is|AUX|VBZ|be winning|VERB|VBG|win marathons|NOUN|NNS|marathon"
        ),
        ["Ben is not winning marathons"]
    );
    assert_eq!(
        expectations("Ben|PROPN|NNP was|AUX|VBD|be tired|ADJ|JJ"),
        ["Ben was not tired"]
    );
}

#[test]
fn copula_needs_literal_is_or_was() {
    // "has" is AUX VBZ but not a copula, and no other rule covers it.
    assert!(expectations("Ben|PROPN|NNP has|AUX|VBZ|have won|VERB|VBN|win").is_empty());
}

#[test]
fn bare_verb() {
    insta::assert_debug_snapshot!(expectations(
        "Ben|PROPN|NNP wins|VERB|VBZ|win marathons|NOUN|NNS|marathon"
    ), @r###"
    [
        "Ben does not win marathons",
        "Ben loses marathons",
    ]
    "###);

    assert_eq!(
        expectations("Ben|PROPN|NNP won|VERB|VBD|win marathons|NOUN|NNS|marathon"),
        ["Ben did not win marathons", "Ben lost marathons"]
    );
}

#[test]
fn bare_verb_non_third_person_uses_did() {
    assert_eq!(
        expectations("They|PRON|PRP|-PRON- play|VERB|VBP chess|NOUN|NN"),
        ["They did not play chess"]
    );
}

#[test]
fn bare_verb_phrasal() {
    assert_eq!(
        expectations(
            "I|PRON|PRP|-PRON- ran|VERB|VBD|run out|ADP|RP of|ADP|IN characters|NOUN|NNS|character"
        ),
        ["I did not run out of characters"]
    );
}

#[test]
fn surface_forms_are_kept() {
    assert_eq!(
        expectations("Ben|PROPN|NNP DOES|AUX|VBZ|do win|VERB|VB"),
        ["Ben DOES not win", "Ben DOES lose", "Ben loses"]
    );
}

#[test]
fn no_rule_matches() {
    assert!(expectations("Ben|PROPN|NNP quickly|ADV|RB ran|VERB|VBD|run").is_empty());
    assert!(expectations("the|DET|DT marathon|NOUN|NN").is_empty());
}

#[test]
fn too_short_input() {
    for annotated in ["", "Ben|PROPN|NNP"] {
        let sentence = TaggedSentence::from_annotated(annotated).unwrap();
        let err = extract_expectations(&sentence, &antonyms(), &inflector(), true).unwrap_err();
        assert!(matches!(err, ExpectationError::InputTooShort { len } if len == sentence.len()));
    }
}

struct BrokenInflector;

impl Inflector for BrokenInflector {
    fn inflect(&self, _lemma: &str, _tag: &Tag) -> Result<Option<Vec<String>>, BoxError> {
        Err("inflection tables missing".into())
    }
}

#[test]
fn inflector_failure_propagates() {
    let sentence = TaggedSentence::from_annotated("Ben|PROPN|NNP wins|VERB|VBZ|win").unwrap();

    let err = extract_expectations(&sentence, &antonyms(), &BrokenInflector, true).unwrap_err();
    assert!(matches!(err, ExpectationError::Inflector { ref lemma, .. } if lemma == "lose"));

    // Without antonyms the inflector is never consulted for this rule.
    let ok = extract_expectations(&sentence, &antonyms(), &BrokenInflector, false).unwrap();
    assert_eq!(ok, ["Ben does not win"]);
}

#[test]
fn hand_built_tags_still_fire_rules() {
    use sardonic::{Pos, TaggedToken};

    let sentence = TaggedSentence::new(vec![
        TaggedToken::new("Ben", "ben", Pos::Propn, Tag::Other("NNP".to_string())),
        TaggedToken::new("wins", "win", Pos::Verb, Tag::Other("VBZ".to_string())),
        TaggedToken::new("marathons", "marathon", Pos::Noun, Tag::Other("NNS".to_string())),
    ]);

    assert_eq!(
        extract_expectations(&sentence, &antonyms(), &inflector(), true).unwrap(),
        ["Ben does not win marathons", "Ben loses marathons"]
    );
}
