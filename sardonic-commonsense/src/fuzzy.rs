//! Loose equality between commonsense objects.
//!
//! Two objects are equal when, after dropping stop-words, one is a prefix or
//! a suffix of the other. "train for marathon" and "train" are the same
//! object under this relation. It is reflexive and symmetric but not
//! transitive.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::NONE_OBJECT;

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "amount",
    "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "back", "be", "became", "because", "become", "becomes", "becoming",
    "been", "before", "beforehand", "behind", "being", "below", "beside", "besides", "between",
    "beyond", "both", "bottom", "but", "by", "ca", "call", "can", "cannot", "could", "did", "do",
    "does", "doing", "done", "down", "due", "during", "each", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "first", "five", "for", "former",
    "formerly", "forty", "four", "from", "front", "full", "further", "get", "give", "go", "had",
    "has", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein", "hereupon",
    "hers", "herself", "him", "himself", "his", "how", "however", "hundred", "i", "if", "in",
    "indeed", "into", "is", "it", "its", "itself", "just", "keep", "last", "latter", "latterly",
    "least", "less", "made", "make", "many", "may", "me", "meanwhile", "might", "mine", "more",
    "moreover", "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely",
    "neither", "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor",
    "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part",
    "per", "perhaps", "please", "put", "quite", "rather", "re", "really", "regarding", "same",
    "say", "see", "seem", "seemed", "seeming", "seems", "serious", "several", "she", "should",
    "show", "side", "since", "six", "sixty", "so", "some", "somehow", "someone", "something",
    "sometime", "sometimes", "somewhere", "still", "such", "take", "ten", "than", "that", "the",
    "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "third", "this", "those", "though",
    "three", "through", "throughout", "thru", "thus", "to", "together", "too", "top", "toward",
    "towards", "twelve", "twenty", "two", "under", "unless", "until", "up", "upon", "us", "used",
    "using", "various", "very", "via", "was", "we", "well", "were", "what", "whatever", "when",
    "whence", "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon",
    "wherever", "whether", "which", "while", "whither", "who", "whoever", "whole", "whom", "whose",
    "why", "will", "with", "within", "without", "would", "yet", "you", "your", "yours",
    "yourself", "yourselves", "'d", "'ll", "'m", "'re", "'s", "'ve", "n't", "’d", "‘d",
    "’ll", "‘ll", "’m", "‘m", "’re", "‘re", "’s", "‘s", "’ve", "‘ve", "n’t", "n‘t",
];

/// Words ignored when comparing objects.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ENGLISH_STOP_WORDS
        .iter()
        .copied()
        .chain(std::iter::once("stay"))
        .collect()
});

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

fn content_words(object: &str) -> String {
    object
        .split_whitespace()
        .filter(|word| !is_stop_word(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fuzzy equality: equal, prefix or suffix after stop-word removal.
///
/// Objects made only of stop-words strip to the empty string, which is a
/// prefix of everything.
///
/// ```
/// use sardonic_commonsense::objects_equal;
///
/// assert!(objects_equal("train for the marathon", "train"));
/// assert!(objects_equal("to be fit", "fit"));
/// assert!(!objects_equal("win", "lose"));
/// ```
pub fn objects_equal(a: &str, b: &str) -> bool {
    let a = content_words(a);
    let b = content_words(b);
    a.starts_with(&b) || b.starts_with(&a) || a.ends_with(&b) || b.ends_with(&a)
}

/// True if `object` is fuzzy-equal to any member of `others`.
pub fn object_in<S: AsRef<str>>(object: &str, others: &[S]) -> bool {
    others.iter().any(|other| objects_equal(object, other.as_ref()))
}

/// Keep the first of each group of fuzzy-equal objects, in input order.
///
/// The placeholder `"none"` and empty strings are dropped.
pub fn dedupe<I, S>(objects: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut unique: Vec<String> = Vec::new();
    for object in objects {
        let object = object.into();
        if object.is_empty() || object == NONE_OBJECT || object_in(&object, &unique) {
            continue;
        }
        unique.push(object);
    }
    unique
}

/// Objects of `a` that have a fuzzy match in `b`, in the order of `a`.
pub fn intersection<S: AsRef<str>, T: AsRef<str>>(a: &[S], b: &[T]) -> Vec<String> {
    a.iter()
        .filter(|object| object_in(object.as_ref(), b))
        .map(|object| object.as_ref().to_string())
        .collect()
}

/// Objects of `a` with no fuzzy match in `b`, in the order of `a`.
pub fn difference<S: AsRef<str>, T: AsRef<str>>(a: &[S], b: &[T]) -> Vec<String> {
    a.iter()
        .filter(|object| !object_in(object.as_ref(), b))
        .map(|object| object.as_ref().to_string())
        .collect()
}
