#![forbid(unsafe_code)]
//! # Synoptic Gospel Analysis CLI
//!
//! Runs the distant-reading pipeline over the three Gospel source files
//! (`pg8828.txt`, `pg8829.txt`, `pg8830.txt`) found in the given directory,
//! writes the JSON report, and prints a short summary.
//!
//! ## Example
//! ```bash
//! cargo run --release -- path/to/corpus --output data/analysis_results.json
//! ```
//!
//! See `--help` for all available options.

use clap::Parser;
use log::error;
use std::process;

use synoptic_analysis::{
    AnalysisReport, AnalyzerConfig, DEFAULT_OUTPUT_PATH, GOSPELS, VaderScorer, run,
};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Directory containing the Gospel source files
    #[arg(default_value = ".")]
    path: String,

    /// Output path for the JSON report, relative to the corpus directory
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: String,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = AnalyzerConfig::new(&cli.path).with_output_path(&cli.output);
    let scorer = VaderScorer::new();

    match run(&config, &scorer) {
        Ok(report) => print_summary(&report, &config),
        Err(e) => {
            error!("Error: {e}");
            process::exit(1);
        }
    }
}

fn print_summary(report: &AnalysisReport, config: &AnalyzerConfig) {
    println!(
        "Analysis complete! Results saved to {}",
        config.resolved_output_path().display()
    );
    println!(
        "Total overlapping words: {}",
        report.metadata.total_overlapping_words
    );

    println!("\n=== Analysis Summary ===");
    for (name, _) in GOSPELS {
        let Some(gospel) = report.gospels.get(name) else {
            continue;
        };
        println!("\n{name}:");
        println!("  Total words: {}", gospel.style_metrics.total_words);
        println!("  Unique words: {}", gospel.style_metrics.unique_words);
        println!(
            "  Lexical diversity: {}",
            gospel.style_metrics.lexical_diversity
        );
        println!("  Sentiment polarity: {}", gospel.sentiment.polarity);
        println!("  Verses: {}", gospel.style_metrics.verse_count);
    }
}
