//! # Synoptic Gospel Analysis
//!
//! Distant-reading analysis of the Gospels of Matthew, Mark, and Luke from
//! the Weymouth New Testament Project Gutenberg files. One run loads the
//! three texts, strips boilerplate, tokenizes and filters words, computes
//! style metrics and sentiment per Gospel, finds the words shared by all
//! three, and writes a single indented JSON report.
//!
//! The pipeline is strictly sequential: each Gospel runs load → clean →
//! tokenize → metrics → sentiment → top words before the next begins, and
//! the overlap step runs once all three token lists are in scope.

use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::PathBuf;

use log::info;

pub mod frequency;
pub mod loader;
pub mod metrics;
pub mod overlap;
pub mod report;
pub mod sentiment;
pub mod tokenize;

pub use report::{
    AnalysisReport, GospelRecord, Metadata, OverlapEntry, Sentiment, StyleMetrics, WordCount,
    save_report,
};
pub use sentiment::{SentimentScorer, VaderScorer};

/// Default location of the JSON artifact, relative to the base path.
pub const DEFAULT_OUTPUT_PATH: &str = "data/analysis_results.json";

/// The three Synoptic Gospels and their Project Gutenberg source files.
pub const GOSPELS: [(&str, &str); 3] = [
    ("Matthew", "pg8828.txt"),
    ("Mark", "pg8829.txt"),
    ("Luke", "pg8830.txt"),
];

/// Read-only configuration for one analysis run.
///
/// Built once at startup and passed by reference; nothing in the pipeline
/// mutates it. The stopword set defaults to the crate-provided English list
/// but can be replaced, which tests use to pin exact token expectations.
pub struct AnalyzerConfig {
    base_path: PathBuf,
    output_path: PathBuf,
    stopwords: HashSet<String>,
}

impl AnalyzerConfig {
    pub fn new<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: base_path.into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            stopwords: tokenize::english_stopwords(),
        }
    }

    /// Replace the output path (resolved relative to the base path).
    pub fn with_output_path<P: Into<PathBuf>>(mut self, output_path: P) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// Replace the stopword set.
    pub fn with_stopwords(mut self, stopwords: HashSet<String>) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Where the JSON report is written.
    pub fn resolved_output_path(&self) -> PathBuf {
        self.base_path.join(&self.output_path)
    }

    fn source_path(&self, filename: &str) -> PathBuf {
        self.base_path.join(filename)
    }
}

/// One fully analyzed Gospel, with its filtered token list still attached
/// for the cross-Gospel overlap step. The token list never leaves the
/// library; only the [`GospelRecord`] is serialized.
struct AnalyzedGospel {
    record: GospelRecord,
    words: Vec<String>,
}

fn analyze_gospel(
    config: &AnalyzerConfig,
    scorer: &dyn SentimentScorer,
    name: &str,
    filename: &str,
) -> io::Result<AnalyzedGospel> {
    info!("analyzing {name} ({filename})");

    let text = loader::load_document(&config.source_path(filename))?;
    let words = tokenize::filter_words(&tokenize::extract_words(&text), &config.stopwords);

    let record = GospelRecord {
        name: name.to_string(),
        sentiment: scorer.score(&text),
        style_metrics: metrics::style_metrics(&text),
        top_words: frequency::top_words(&words, 20),
        word_cloud: frequency::top_words(&words, 50),
    };

    Ok(AnalyzedGospel { record, words })
}

/// Run the full pipeline over the three Gospels and assemble the report.
///
/// Fails on the first unreadable source file; no partial report is
/// produced. The overlap counts are computed from the same filtered token
/// sequences the per-Gospel rankings were built from.
pub fn analyze_corpus(
    config: &AnalyzerConfig,
    scorer: &dyn SentimentScorer,
) -> io::Result<AnalysisReport> {
    let matthew = analyze_gospel(config, scorer, GOSPELS[0].0, GOSPELS[0].1)?;
    let mark = analyze_gospel(config, scorer, GOSPELS[1].0, GOSPELS[1].1)?;
    let luke = analyze_gospel(config, scorer, GOSPELS[2].0, GOSPELS[2].1)?;

    let overlapping_words = overlap::overlapping_words(&matthew.words, &mark.words, &luke.words);
    let metadata = Metadata::new(overlapping_words.len());

    let mut gospels = BTreeMap::new();
    for analyzed in [matthew, mark, luke] {
        gospels.insert(analyzed.record.name.clone(), analyzed.record);
    }

    Ok(AnalysisReport {
        gospels,
        overlapping_words,
        metadata,
    })
}

/// Analyze, write the JSON artifact, and hand the report back for summary
/// printing.
pub fn run(config: &AnalyzerConfig, scorer: &dyn SentimentScorer) -> io::Result<AnalysisReport> {
    let analysis = analyze_corpus(config, scorer)?;

    let output_path = config.resolved_output_path();
    save_report(&analysis, &output_path)?;
    info!("results saved to {}", output_path.display());

    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn config_resolves_output_under_base_path() {
        let config = AnalyzerConfig::new("/corpus");
        assert_eq!(
            config.resolved_output_path(),
            Path::new("/corpus/data/analysis_results.json")
        );

        let config = AnalyzerConfig::new("/corpus").with_output_path("out/report.json");
        assert_eq!(
            config.resolved_output_path(),
            Path::new("/corpus/out/report.json")
        );
    }

    #[test]
    fn gospel_table_is_fixed() {
        let names: Vec<&str> = GOSPELS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["Matthew", "Mark", "Luke"]);
    }

    #[test]
    fn missing_source_aborts_without_report() {
        let dir = tempfile::tempdir().unwrap();
        let config = AnalyzerConfig::new(dir.path());
        let result = analyze_corpus(&config, &VaderScorer::new());
        assert!(result.is_err());
        assert!(!config.resolved_output_path().exists());
    }
}
