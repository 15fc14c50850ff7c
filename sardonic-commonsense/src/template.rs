//! Sentences built from relation objects, fed to the sentiment classifier.

use sardonic::RelationType;

/// `"a"`, `"a and b"`, `"a, b and c"`. Empty input joins to `""`.
pub fn and_join<S: AsRef<str>>(objects: &[S]) -> String {
    match objects {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let init: Vec<&str> = init.iter().map(|object| object.as_ref()).collect();
            format!("{} and {}", init.join(", "), last.as_ref())
        }
    }
}

/// Embed the joined objects in the sentence template for `relation`.
///
/// ```
/// use sardonic::RelationType;
/// use sardonic_commonsense::relation_sentence;
///
/// assert_eq!(
///     relation_sentence(RelationType::XAttr, &["brave", "fit", "fast"]),
///     "He is a brave, fit and fast person."
/// );
/// ```
pub fn relation_sentence<S: AsRef<str>>(relation: RelationType, objects: &[S]) -> String {
    let joined = and_join(objects);
    match relation {
        RelationType::XAttr => format!("He is a {} person.", joined),
        RelationType::XIntent => format!("He wanted to {}.", joined),
        RelationType::XNeed => format!("He decided to {}.", joined),
        RelationType::XWant => format!("He wants to {}.", joined),
        RelationType::XReact => format!("He feels {}.", joined),
        _ => format!("He {}.", joined),
    }
}
