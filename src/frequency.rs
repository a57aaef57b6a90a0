use std::collections::HashMap;

use crate::report::WordCount;

/// Count each distinct word in a token sequence.
pub fn count_words(words: &[String]) -> HashMap<String, usize> {
    let mut frequency: HashMap<String, usize> = HashMap::new();
    for word in words {
        *frequency.entry(word.to_owned()).or_insert(0) += 1;
    }
    frequency
}

/// The `n` most frequent distinct words in a token sequence.
///
/// Sorted by descending count; ties keep the order in which the words first
/// appeared in the input (stable-counting semantics). For `n` larger than
/// the number of distinct words, every distinct word is returned.
///
/// # Example
/// ```
/// use synoptic_analysis::frequency::top_words;
/// let words: Vec<String> = ["crumb", "loaf", "crumb"]
///     .iter()
///     .map(|w| w.to_string())
///     .collect();
/// let top = top_words(&words, 1);
/// assert_eq!(top[0].word, "crumb");
/// assert_eq!(top[0].count, 2);
/// ```
pub fn top_words(words: &[String], n: usize) -> Vec<WordCount> {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    for (idx, word) in words.iter().enumerate() {
        first_seen.entry(word).or_insert(idx);
    }

    let mut ranked: Vec<(String, usize)> = count_words(words).into_iter().collect();
    ranked.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| first_seen[a.0.as_str()].cmp(&first_seen[b.0.as_str()]))
    });
    ranked.truncate(n);

    ranked
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect()
}
