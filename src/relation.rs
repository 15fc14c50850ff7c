//! Commonsense relation types and per-relation object sets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::SardonicError;

/// A category of if-then commonsense inference about an event.
///
/// The `x*` relations describe the actor, the `o*` relations describe others.
/// Ordering follows declaration order, which keeps map iteration stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RelationType {
    /// What the actor intended by the event
    #[serde(rename = "xIntent")]
    XIntent,
    /// What the actor needed to do beforehand
    #[serde(rename = "xNeed")]
    XNeed,
    /// How the actor is seen
    #[serde(rename = "xAttr")]
    XAttr,
    /// How the actor feels afterwards
    #[serde(rename = "xReact")]
    XReact,
    /// What the actor wants afterwards
    #[serde(rename = "xWant")]
    XWant,
    /// What happens to the actor
    #[serde(rename = "xEffect")]
    XEffect,
    #[serde(rename = "oReact")]
    OReact,
    #[serde(rename = "oEffect")]
    OEffect,
    #[serde(rename = "oWant")]
    OWant,
}

impl RelationType {
    /// Relations describing the state of affairs before the event.
    pub const PRIOR: [RelationType; 3] = [Self::XIntent, Self::XNeed, Self::XAttr];

    /// Relations describing the state of affairs after the event.
    pub const POSTERIOR: [RelationType; 6] = [
        Self::XReact,
        Self::XWant,
        Self::XEffect,
        Self::OReact,
        Self::OEffect,
        Self::OWant,
    ];

    /// The relations the commonsense builder queries by default.
    pub const WORKING_SET: [RelationType; 6] = [
        Self::XIntent,
        Self::XNeed,
        Self::XAttr,
        Self::XWant,
        Self::XReact,
        Self::XEffect,
    ];

    /// Order in which relations claim objects during cross-relation dedupe.
    pub const DEDUPE_PRIORITY: [RelationType; 6] = [
        Self::XAttr,
        Self::XIntent,
        Self::XNeed,
        Self::XReact,
        Self::XWant,
        Self::XEffect,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::XIntent => "xIntent",
            Self::XNeed => "xNeed",
            Self::XAttr => "xAttr",
            Self::XReact => "xReact",
            Self::XWant => "xWant",
            Self::XEffect => "xEffect",
            Self::OReact => "oReact",
            Self::OEffect => "oEffect",
            Self::OWant => "oWant",
        }
    }

    pub fn is_prior(&self) -> bool {
        Self::PRIOR.contains(self)
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationType {
    type Err = SardonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "xIntent" => Self::XIntent,
            "xNeed" => Self::XNeed,
            "xAttr" => Self::XAttr,
            "xReact" => Self::XReact,
            "xWant" => Self::XWant,
            "xEffect" => Self::XEffect,
            "oReact" => Self::OReact,
            "oEffect" => Self::OEffect,
            "oWant" => Self::OWant,
            other => return Err(SardonicError::UnknownRelation(other.to_string())),
        })
    }
}

/// Free-text commonsense objects grouped by relation, in beam order.
///
/// A relation with no entry reads as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommonsenseObjectSet {
    objects: BTreeMap<RelationType, Vec<String>>,
}

impl CommonsenseObjectSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, replacing any previous list for `relation`.
    pub fn with<I, S>(mut self, relation: RelationType, objects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(relation, objects.into_iter().map(Into::into).collect());
        self
    }

    pub fn insert(&mut self, relation: RelationType, objects: Vec<String>) {
        self.objects.insert(relation, objects);
    }

    /// Objects for `relation`; empty if the relation is absent.
    pub fn get(&self, relation: RelationType) -> &[String] {
        self.objects
            .get(&relation)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains_relation(&self, relation: RelationType) -> bool {
        self.objects.contains_key(&relation)
    }

    /// Relations present in this set, in declaration order.
    pub fn relations(&self) -> impl Iterator<Item = RelationType> + '_ {
        self.objects.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RelationType, &[String])> {
        self.objects
            .iter()
            .map(|(relation, objects)| (*relation, objects.as_slice()))
    }

    /// Apply `f` to every relation's list, keeping the relation keys.
    pub fn map_objects<F>(self, mut f: F) -> Self
    where
        F: FnMut(RelationType, Vec<String>) -> Vec<String>,
    {
        Self {
            objects: self
                .objects
                .into_iter()
                .map(|(relation, objects)| {
                    let mapped = f(relation, objects);
                    (relation, mapped)
                })
                .collect(),
        }
    }

    /// Fallible form of [`map_objects`](Self::map_objects).
    pub fn try_map_objects<F, E>(self, mut f: F) -> Result<Self, E>
    where
        F: FnMut(RelationType, Vec<String>) -> Result<Vec<String>, E>,
    {
        let mut objects = BTreeMap::new();
        for (relation, list) in self.objects {
            objects.insert(relation, f(relation, list)?);
        }
        Ok(Self { objects })
    }

    /// Keep only the listed relations.
    pub fn retain_relations(&mut self, keep: &[RelationType]) {
        self.objects.retain(|relation, _| keep.contains(relation));
    }

    /// Total number of objects across relations.
    pub fn object_count(&self) -> usize {
        self.objects.values().map(Vec::len).sum()
    }
}

impl FromIterator<(RelationType, Vec<String>)> for CommonsenseObjectSet {
    fn from_iter<T: IntoIterator<Item = (RelationType, Vec<String>)>>(iter: T) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

/// The commonsense objects for one (event, failed expectation) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonsenseBuilderResponse {
    pub event_objects: CommonsenseObjectSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_expectation_objects: Option<CommonsenseObjectSet>,
}

impl CommonsenseBuilderResponse {
    pub fn new(
        event_objects: CommonsenseObjectSet,
        failed_expectation_objects: Option<CommonsenseObjectSet>,
    ) -> Self {
        Self {
            event_objects,
            failed_expectation_objects,
        }
    }
}
