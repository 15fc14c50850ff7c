//! Commonsense object filtering for sardonic.
//!
//! A commonsense model produces beams of free-text objects per relation for
//! an event ("Ben won the marathon" → xAttr: "competitive", "fit", ...). The
//! beams are noisy: repeated with small variations, shared between the event
//! and its failed expectation, and sometimes of the wrong affect. This crate
//! cleans them up.
//!
//! - [`normalize`] puts a raw object in canonical form
//! - [`objects_equal`] and [`dedupe`] implement loose object equality
//! - [`remove_overlap`] runs the full filter over both sides
//! - [`CommonsenseBuilder`] queries the model and filters in one call

mod builder;
mod error;
mod fuzzy;
mod normalize;
mod overlap;
mod sentiment;
mod template;

pub use builder::CommonsenseBuilder;
pub use error::{CommonsenseError, CommonsenseResult};
pub use fuzzy::{dedupe, difference, intersection, is_stop_word, object_in, objects_equal};
pub use normalize::{normalize, NONE_OBJECT};
pub use overlap::{normalize_set, remove_overlap, REFERENCE_ATTRIBUTES};
pub use sentiment::{preprocess_text, RankedSentiment};
pub use template::{and_join, relation_sentence};
