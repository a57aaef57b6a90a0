use crate::report::{Sentiment, round_to};

/// Document-level sentiment scoring, consumed by the pipeline as a black
/// box. Implementations must return polarity in [-1, 1] and subjectivity in
/// [0, 1], both rounded to four decimal places.
pub trait SentimentScorer {
    fn score(&self, text: &str) -> Sentiment;
}

/// Default scorer backed by the VADER lexicon (`vader_sentiment` crate).
///
/// VADER reports a normalized `compound` score in [-1, 1], used directly as
/// polarity, plus the positive/neutral/negative proportions of the text.
/// Subjectivity is taken as the non-neutral mass `pos + neg`, which lies in
/// [0, 1] since the three proportions sum to 1.
#[derive(Debug, Default)]
pub struct VaderScorer;

impl VaderScorer {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for VaderScorer {
    fn score(&self, text: &str) -> Sentiment {
        let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);

        let compound = scores.get("compound").copied().unwrap_or(0.0);
        let pos = scores.get("pos").copied().unwrap_or(0.0);
        let neg = scores.get("neg").copied().unwrap_or(0.0);

        Sentiment {
            polarity: round_to(compound, 4),
            subjectivity: round_to((pos + neg).clamp(0.0, 1.0), 4),
        }
    }
}
