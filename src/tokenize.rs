use std::collections::HashSet;

use stop_words::{LANGUAGE, get};

/// Lowercase a text and split it into maximal runs of alphabetic characters.
///
/// Digits and punctuation never join a token, so `don't` yields `don` and
/// `t` as separate tokens. Order is preserved and duplicates are kept; the
/// frequency counts depend on both.
///
/// # Example
/// ```
/// use synoptic_analysis::tokenize::extract_words;
/// let words = extract_words("Don't count 123 twice!");
/// assert_eq!(words, vec!["don", "t", "count", "twice"]);
/// ```
pub fn extract_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !c.is_alphabetic())
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Drop stopwords and tokens of two characters or fewer.
pub fn filter_words(words: &[String], stopwords: &HashSet<String>) -> Vec<String> {
    words
        .iter()
        .filter(|word| word.chars().count() > 2 && !stopwords.contains(word.as_str()))
        .cloned()
        .collect()
}

/// The fixed English stopword list used for the whole run.
pub fn english_stopwords() -> HashSet<String> {
    get(LANGUAGE::English).into_iter().collect()
}
