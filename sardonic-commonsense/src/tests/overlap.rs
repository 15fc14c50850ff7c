use sardonic::scripted::{ScriptedSentiment, ScriptedTagger};
use sardonic::{BoxError, CommonsenseObjectSet, RelationType, SentimentClassifier, SentimentLabel};

use crate::{remove_overlap, CommonsenseError, NONE_OBJECT};

fn tagger() -> ScriptedTagger {
    ScriptedTagger::new()
        .with_words("trained|VERB|VBD|train won|VERB|VBD|win")
        .unwrap()
}

fn sentiment() -> ScriptedSentiment {
    ScriptedSentiment::new("positive")
        .with("He is a lazy person.", "negative")
        .with("He wants to sleep.", "negative")
}

fn assert_clean(set: &CommonsenseObjectSet) {
    for (relation, objects) in set.iter() {
        for object in objects {
            assert!(
                !object.is_empty() && object != NONE_OBJECT,
                "{} leaked {:?}",
                relation,
                object
            );
        }
    }
}

#[test]
fn duplicated_attribute_survives_only_under_xattr() {
    let event = CommonsenseObjectSet::new()
        .with(RelationType::XAttr, ["competitive", "fit"])
        .with(RelationType::XEffect, ["fit", "gets a medal"])
        .with(RelationType::XIntent, ["to won"])
        .with(RelationType::XNeed, ["to trained", "none", " "]);

    let (event, expectation) = remove_overlap(event, None, &tagger(), &sentiment()).unwrap();

    assert!(expectation.is_none());
    assert_eq!(event.get(RelationType::XAttr), ["competitive", "fit"]);
    assert_eq!(event.get(RelationType::XIntent), ["win"]);
    assert_eq!(event.get(RelationType::XNeed), ["train"]);
    assert_eq!(event.get(RelationType::XEffect), ["gets a medal"]);
}

#[test]
fn expectation_loses_shared_objects_and_contradictions_are_dropped() {
    let event = CommonsenseObjectSet::new()
        .with(RelationType::XAttr, ["competitive", "fit"])
        .with(RelationType::XWant, ["rest", "celebrate", "sleep"]);
    let expectation = CommonsenseObjectSet::new()
        .with(RelationType::XAttr, ["fit", "lazy"])
        .with(RelationType::XWant, ["rest"]);

    let (event, expectation) =
        remove_overlap(event, Some(expectation), &tagger(), &sentiment()).unwrap();

    // The event keeps what it shares with the expectation.
    assert_eq!(event.get(RelationType::XAttr), ["competitive", "fit"]);
    assert_eq!(event.get(RelationType::XWant), ["rest", "celebrate"]);

    let expectation = expectation.unwrap();
    assert_eq!(expectation.get(RelationType::XAttr), ["lazy"]);
    assert!(expectation.get(RelationType::XWant).is_empty());
}

#[test]
fn expectation_without_own_attributes_is_dropped() {
    let event = CommonsenseObjectSet::new().with(RelationType::XAttr, ["fit"]);

    let shared_only = CommonsenseObjectSet::new()
        .with(RelationType::XAttr, ["very fit"])
        .with(RelationType::XWant, ["run"]);
    let (_, expectation) =
        remove_overlap(event.clone(), Some(shared_only), &tagger(), &sentiment()).unwrap();
    assert!(expectation.is_none());

    let no_attributes = CommonsenseObjectSet::new().with(RelationType::XWant, ["run"]);
    let (_, expectation) =
        remove_overlap(event, Some(no_attributes), &tagger(), &sentiment()).unwrap();
    assert!(expectation.is_none());
}

#[test]
fn side_without_attributes_skips_the_sentiment_filter() {
    let event = CommonsenseObjectSet::new().with(RelationType::XWant, ["sleep", "eat"]);

    let (event, _) = remove_overlap(event, None, &tagger(), &sentiment()).unwrap();
    assert_eq!(event.get(RelationType::XWant), ["sleep", "eat"]);
}

#[test]
fn placeholders_never_leak() {
    let event = CommonsenseObjectSet::new()
        .with(RelationType::XAttr, ["none", "personx be happy", "brave ."])
        .with(RelationType::XIntent, ["to be", "", "personx"])
        .with(RelationType::XReact, ["none", "proud"]);
    let expectation = CommonsenseObjectSet::new()
        .with(RelationType::XAttr, ["person x", "timid", "none"])
        .with(RelationType::XEffect, ["."]);

    let (event, expectation) =
        remove_overlap(event, Some(expectation), &tagger(), &sentiment()).unwrap();

    assert_clean(&event);
    assert_eq!(event.get(RelationType::XAttr), ["brave"]);
    assert_eq!(event.get(RelationType::XReact), ["proud"]);
    let expectation = expectation.unwrap();
    assert_clean(&expectation);
    assert_eq!(expectation.get(RelationType::XAttr), ["timid"]);
}

#[test]
fn filtering_is_deterministic() {
    let event = CommonsenseObjectSet::new()
        .with(RelationType::XAttr, ["competitive", "fit", "strong"])
        .with(RelationType::XWant, ["rest", "celebrate", "sleep"])
        .with(RelationType::XEffect, ["gets a medal", "strong legs"]);
    let expectation = CommonsenseObjectSet::new().with(RelationType::XAttr, ["lazy", "fit"]);

    let first = remove_overlap(event.clone(), Some(expectation.clone()), &tagger(), &sentiment())
        .unwrap();
    let second = remove_overlap(event, Some(expectation), &tagger(), &sentiment()).unwrap();
    assert_eq!(first, second);
}

struct DownClassifier;

impl SentimentClassifier for DownClassifier {
    fn classify(&self, _text: &str) -> Result<SentimentLabel, BoxError> {
        Err("classifier unavailable".into())
    }
}

#[test]
fn classifier_failure_names_the_sentence() {
    let event = CommonsenseObjectSet::new().with(RelationType::XAttr, ["brave", "kind"]);

    let err = remove_overlap(event, None, &tagger(), &DownClassifier).unwrap_err();
    assert!(matches!(
        err,
        CommonsenseError::Sentiment { ref text, .. } if text == "He is a brave and kind person."
    ));
}
