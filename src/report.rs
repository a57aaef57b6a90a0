use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Granularity tag recorded in the report metadata.
pub const ANALYSIS_TYPE: &str = "whole_gospel_level";
/// Sentiment backend identifier recorded in the report metadata.
pub const SENTIMENT_TOOL: &str = "VADER";
/// Source corpus description recorded in the report metadata.
pub const SOURCE_CORPUS: &str = "Weymouth New Testament in Modern Speech (1913)";

/// A word and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Document-level sentiment: polarity in [-1, 1], subjectivity in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Stylistic statistics derived from one Gospel's cleaned text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleMetrics {
    pub total_words: usize,
    pub unique_words: usize,
    pub lexical_diversity: f64,
    pub vocabulary_size: usize,
    pub verse_count: usize,
    pub avg_words_per_verse: f64,
}

/// The externally visible result for one Gospel. The filtered token list
/// used during analysis is deliberately not part of this record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GospelRecord {
    pub name: String,
    pub sentiment: Sentiment,
    pub style_metrics: StyleMetrics,
    pub top_words: Vec<WordCount>,
    pub word_cloud: Vec<WordCount>,
}

/// A word present in all three Gospels, with per-Gospel occurrence counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapEntry {
    pub word: String,
    pub matthew: usize,
    pub mark: usize,
    pub luke: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub total_overlapping_words: usize,
    pub analysis_type: String,
    pub sentiment_tool: String,
    pub source: String,
}

impl Metadata {
    pub fn new(total_overlapping_words: usize) -> Self {
        Self {
            total_overlapping_words,
            analysis_type: ANALYSIS_TYPE.to_string(),
            sentiment_tool: SENTIMENT_TOOL.to_string(),
            source: SOURCE_CORPUS.to_string(),
        }
    }
}

/// The single artifact a run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub gospels: BTreeMap<String, GospelRecord>,
    pub overlapping_words: Vec<OverlapEntry>,
    pub metadata: Metadata,
}

/// Round to a fixed number of decimal places, as reported values are.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Write the report as indented UTF-8 JSON, creating parent directories as
/// needed. Non-ASCII characters are written as-is, not escaped.
pub fn save_report(report: &AnalysisReport, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value as Json;

    fn sample_report() -> AnalysisReport {
        let record = GospelRecord {
            name: "Matthew".to_string(),
            sentiment: Sentiment {
                polarity: 0.1234,
                subjectivity: 0.5,
            },
            style_metrics: StyleMetrics {
                total_words: 10,
                unique_words: 8,
                lexical_diversity: 0.8,
                vocabulary_size: 8,
                verse_count: 2,
                avg_words_per_verse: 5.0,
            },
            top_words: vec![WordCount {
                word: "kingdom".to_string(),
                count: 3,
            }],
            word_cloud: vec![WordCount {
                word: "kingdom".to_string(),
                count: 3,
            }],
        };
        let mut gospels = BTreeMap::new();
        gospels.insert("Matthew".to_string(), record);
        AnalysisReport {
            gospels,
            overlapping_words: vec![OverlapEntry {
                word: "kingdom".to_string(),
                matthew: 3,
                mark: 2,
                luke: 1,
                total: 6,
            }],
            metadata: Metadata::new(1),
        }
    }

    #[test]
    fn rounding_behaves() {
        assert_eq!(round_to(0.123_456, 4), 0.1235);
        assert_eq!(round_to(2.0 / 3.0, 4), 0.6667);
        assert_eq!(round_to(5.125, 2), 5.13);
        assert_eq!(round_to(-0.123_44, 4), -0.1234);
    }

    #[test]
    fn json_schema_field_names() {
        let json: Json = serde_json::to_value(sample_report()).unwrap();
        assert!(json["gospels"]["Matthew"]["sentiment"]["polarity"].is_number());
        assert!(json["gospels"]["Matthew"]["style_metrics"]["avg_words_per_verse"].is_number());
        assert_eq!(json["gospels"]["Matthew"]["top_words"][0]["word"], "kingdom");
        assert_eq!(json["overlapping_words"][0]["matthew"], 3);
        assert_eq!(json["metadata"]["analysis_type"], ANALYSIS_TYPE);
        assert_eq!(json["metadata"]["sentiment_tool"], SENTIMENT_TOOL);
        assert_eq!(json["metadata"]["source"], SOURCE_CORPUS);
        // raw token lists never appear in the serialized record
        assert!(json["gospels"]["Matthew"].get("all_words").is_none());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("out.json");
        save_report(&sample_report(), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n  \"gospels\""), "2-space indent expected");
        let parsed: AnalysisReport = serde_json::from_str(&text).unwrap();
        assert_eq!(
            parsed.metadata.total_overlapping_words,
            parsed.overlapping_words.len()
        );
    }
}
