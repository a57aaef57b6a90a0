use std::collections::HashSet;

use crate::report::OverlapEntry;

/// Words shared by the filtered vocabularies of all three Gospels.
///
/// Each entry carries the word's occurrence count in every Gospel, counted
/// independently over that Gospel's full filtered token sequence, and the
/// sum of the three. Sorted by descending total; equal totals are ordered
/// alphabetically so the output is reproducible across runs.
pub fn overlapping_words(
    matthew: &[String],
    mark: &[String],
    luke: &[String],
) -> Vec<OverlapEntry> {
    let matthew_set: HashSet<&str> = matthew.iter().map(String::as_str).collect();
    let mark_set: HashSet<&str> = mark.iter().map(String::as_str).collect();
    let luke_set: HashSet<&str> = luke.iter().map(String::as_str).collect();

    let mut entries: Vec<OverlapEntry> = matthew_set
        .iter()
        .filter(|word| mark_set.contains(*word) && luke_set.contains(*word))
        .map(|word| {
            let matthew_count = occurrences(matthew, word);
            let mark_count = occurrences(mark, word);
            let luke_count = occurrences(luke, word);
            OverlapEntry {
                word: word.to_string(),
                matthew: matthew_count,
                mark: mark_count,
                luke: luke_count,
                total: matthew_count + mark_count + luke_count,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.word.cmp(&b.word)));
    entries
}

fn occurrences(words: &[String], word: &str) -> usize {
    words.iter().filter(|w| w.as_str() == word).count()
}
