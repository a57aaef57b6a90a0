use std::collections::HashSet;

use crate::loader::is_verse_line;
use crate::report::{StyleMetrics, round_to};
use crate::tokenize::extract_words;

/// Compute stylistic metrics for one cleaned document.
///
/// Word totals are taken over the *unfiltered* token sequence, stopwords and
/// short tokens included, so `total_words` reflects the running text rather
/// than the filtered vocabulary. Both ratios fall back to 0 when their
/// denominator is 0.
pub fn style_metrics(text: &str) -> StyleMetrics {
    let all_words = extract_words(text);
    let total_words = all_words.len();
    let unique_words = all_words.iter().collect::<HashSet<_>>().len();
    let verse_count = text.lines().filter(|line| is_verse_line(line)).count();

    let lexical_diversity = if total_words > 0 {
        round_to(unique_words as f64 / total_words as f64, 4)
    } else {
        0.0
    };
    let avg_words_per_verse = if verse_count > 0 {
        round_to(total_words as f64 / verse_count as f64, 2)
    } else {
        0.0
    };

    StyleMetrics {
        total_words,
        unique_words,
        lexical_diversity,
        vocabulary_size: unique_words,
        verse_count,
        avg_words_per_verse,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_unfiltered_words_and_verses() {
        let text = "001:001 The cat sat on the mat.\n001:002 The cat ran far away.";
        let m = style_metrics(text);
        // the cat sat on the mat the cat ran far away
        assert_eq!(m.total_words, 11);
        assert_eq!(m.unique_words, 8);
        assert_eq!(m.vocabulary_size, 8);
        assert_eq!(m.verse_count, 2);
        assert_eq!(m.lexical_diversity, round_to(8.0 / 11.0, 4));
        assert_eq!(m.avg_words_per_verse, 5.5);
    }

    #[test]
    fn diversity_is_exact_ratio() {
        let text = "001:001 walk walk walk rest";
        let m = style_metrics(text);
        assert_eq!(m.total_words, 4);
        assert_eq!(m.unique_words, 2);
        assert_eq!(m.lexical_diversity, 0.5);
    }

    #[test]
    fn empty_text_guards_division() {
        let m = style_metrics("");
        assert_eq!(m.total_words, 0);
        assert_eq!(m.unique_words, 0);
        assert_eq!(m.lexical_diversity, 0.0);
        assert_eq!(m.verse_count, 0);
        assert_eq!(m.avg_words_per_verse, 0.0);
    }

    #[test]
    fn verseless_text_has_zero_average() {
        let m = style_metrics("plain prose with no verse markers at all");
        assert!(m.total_words > 0);
        assert_eq!(m.verse_count, 0);
        assert_eq!(m.avg_words_per_verse, 0.0);
    }
}
