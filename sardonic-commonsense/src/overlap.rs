//! Overlap and contradiction filtering of event / expectation objects.
//!
//! The filter runs in a fixed order:
//!
//! 1. normalize and dedupe every relation on both sides
//! 2. drop the expectation side if it has no `xAttr` objects
//! 3. remove expectation objects shared with the event, per relation
//! 4. drop the expectation side again if `xAttr` emptied
//! 5. build an `xAttr` reference sentence per side
//! 6. drop objects whose sentiment differs from the reference
//! 7. remove cross-relation duplicates, earlier relations winning

use sardonic::{CommonsenseObjectSet, RelationType, SentimentClassifier, SentimentLabel, Tagger};

use crate::{
    dedupe, difference, intersection, normalize, relation_sentence, CommonsenseError,
    CommonsenseResult, NONE_OBJECT,
};

/// Number of leading `xAttr` objects that form the reference sentence.
pub const REFERENCE_ATTRIBUTES: usize = 5;

/// Filter the event's objects and, if given, the failed expectation's.
///
/// Only the expectation side loses objects shared with the event. The
/// expectation side comes back as `None` when it has no attributes left.
pub fn remove_overlap<T, C>(
    event: CommonsenseObjectSet,
    expectation: Option<CommonsenseObjectSet>,
    tagger: &T,
    classifier: &C,
) -> CommonsenseResult<(CommonsenseObjectSet, Option<CommonsenseObjectSet>)>
where
    T: Tagger,
    C: SentimentClassifier,
{
    let event = normalize_set(event, tagger)?;
    let mut expectation = match expectation {
        Some(set) => Some(normalize_set(set, tagger)?),
        None => None,
    };
    expectation = expectation.filter(has_attributes);

    if let Some(set) = expectation.take() {
        let pruned = set.map_objects(|relation, objects| {
            let shared = intersection(event.get(relation), &objects);
            difference(&objects, &shared)
        });
        expectation = Some(pruned).filter(has_attributes);
        if expectation.is_none() {
            tracing::debug!(
                target: "sardonic_commonsense",
                "expectation shares every attribute with the event, dropping it"
            );
        }
    }

    let event = dedupe_across_relations(drop_contradictions(event, classifier)?);
    let expectation = match expectation {
        Some(set) => Some(dedupe_across_relations(drop_contradictions(set, classifier)?)),
        None => None,
    };

    Ok((event, expectation))
}

/// Normalize then dedupe every relation's objects.
pub fn normalize_set<T: Tagger>(
    set: CommonsenseObjectSet,
    tagger: &T,
) -> CommonsenseResult<CommonsenseObjectSet> {
    set.try_map_objects(|relation, objects| {
        let mut normalized = Vec::with_capacity(objects.len());
        for object in objects {
            if object == NONE_OBJECT || object.trim().is_empty() {
                continue;
            }
            normalized.push(normalize(&object, relation, tagger)?);
        }
        Ok(dedupe(normalized))
    })
}

fn has_attributes(set: &CommonsenseObjectSet) -> bool {
    !set.get(RelationType::XAttr).is_empty()
}

fn classify<C: SentimentClassifier>(
    classifier: &C,
    text: String,
) -> CommonsenseResult<SentimentLabel> {
    classifier
        .classify(&text)
        .map_err(|source| CommonsenseError::Sentiment { text, source })
}

/// Keep objects whose one-object sentence reads like the `xAttr` reference.
///
/// A side without attributes has no reference and is returned unchanged.
fn drop_contradictions<C: SentimentClassifier>(
    set: CommonsenseObjectSet,
    classifier: &C,
) -> CommonsenseResult<CommonsenseObjectSet> {
    let attributes = set.get(RelationType::XAttr);
    if attributes.is_empty() {
        tracing::debug!(target: "sardonic_commonsense", "no attributes, skipping sentiment filter");
        return Ok(set);
    }

    let take = attributes.len().min(REFERENCE_ATTRIBUTES);
    let reference = relation_sentence(RelationType::XAttr, &attributes[..take]);
    let reference = classify(classifier, reference)?;

    set.try_map_objects(|relation, objects| {
        let mut kept = Vec::with_capacity(objects.len());
        for object in objects {
            let label = classify(classifier, relation_sentence(relation, &[&object]))?;
            if label == reference {
                kept.push(object);
            } else {
                tracing::trace!(
                    target: "sardonic_commonsense",
                    %relation,
                    object = %object,
                    %label,
                    "dropping object contradicting the reference"
                );
            }
        }
        Ok(kept)
    })
}

/// Fold over relations in priority order, letting each claim the objects no
/// earlier relation holds.
fn dedupe_across_relations(mut set: CommonsenseObjectSet) -> CommonsenseObjectSet {
    let mut accepted: Vec<String> = Vec::new();
    for relation in RelationType::DEDUPE_PRIORITY {
        if !set.contains_relation(relation) {
            continue;
        }
        let kept = difference(set.get(relation), &accepted);
        accepted.extend(kept.iter().cloned());
        set.insert(relation, kept);
    }
    set
}
