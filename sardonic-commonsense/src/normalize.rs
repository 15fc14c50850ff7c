//! Canonical form for raw commonsense beams.

use sardonic::{Pos, RelationType, Tagger};

use crate::{CommonsenseError, CommonsenseResult};

/// Placeholder the model emits for "no inference"; also the collapsed form
/// of copula objects.
pub const NONE_OBJECT: &str = "none";

/// Normalize one raw object generated for `relation`.
///
/// Leading "to" / "personx" / "person x" and a trailing "." are stripped.
/// Except for `xAttr` and `xReact`, a leading verb is replaced by its lemma.
/// "their" and "they" become "your" and "you". An object starting with "be"
/// collapses to [`NONE_OBJECT`].
///
/// ```
/// use sardonic::scripted::ScriptedTagger;
/// use sardonic::RelationType;
/// use sardonic_commonsense::normalize;
///
/// let tagger = ScriptedTagger::new().with_words("trained|VERB|VBD|train").unwrap();
/// let object = normalize("to trained for their race .", RelationType::XNeed, &tagger).unwrap();
/// assert_eq!(object, "train for your race");
/// ```
pub fn normalize<T: Tagger>(
    raw: &str,
    relation: RelationType,
    tagger: &T,
) -> CommonsenseResult<String> {
    let mut tokens: Vec<String> = raw.split_whitespace().map(str::to_string).collect();

    if matches!(tokens.first().map(String::as_str), Some("to" | "personx")) {
        tokens.remove(0);
    }
    if tokens.len() > 1 && tokens[0] == "person" && tokens[1] == "x" {
        tokens.drain(..2);
    }
    if tokens.last().map(String::as_str) == Some(".") {
        tokens.pop();
    }

    if !tokens.is_empty() && !matches!(relation, RelationType::XAttr | RelationType::XReact) {
        let text = tokens.join(" ");
        let sentence = tagger
            .tag(&text)
            .map_err(|source| CommonsenseError::Tagger { text, source })?;
        if let Some(first) = sentence.subject() {
            let head = if first.has_real_lemma() && first.pos == Pos::Verb {
                first.lemma.clone()
            } else {
                first.text.clone()
            };
            tokens = std::iter::once(head)
                .chain(sentence.texts_from(1).map(str::to_string))
                .collect();
        }
    }

    for token in tokens.iter_mut() {
        match token.as_str() {
            "their" => *token = "your".to_string(),
            "they" => *token = "you".to_string(),
            _ => {}
        }
    }

    if tokens.first().map(String::as_str) == Some("be") {
        return Ok(NONE_OBJECT.to_string());
    }
    Ok(tokens.join(" "))
}
