use serde::{Deserialize, Serialize};

const NEGATIVE_THRESHOLD: f64 = -0.3;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub sentiment_score: f64,
    pub is_negative: bool,
}

/// Lexicon-based polarity proxy. Hits are counted by plain substring
/// occurrence, so a lexicon entry also matches inside longer words.
#[derive(Debug, Clone)]
pub struct SentimentEstimator {
    lexicon: Vec<String>,
}

impl SentimentEstimator {
    pub fn new(lexicon: &[String]) -> Self {
        Self {
            lexicon: lexicon
                .iter()
                .map(|w| w.to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn negative_hits(&self, text: &str) -> usize {
        let folded = text.to_lowercase();
        self.lexicon
            .iter()
            .map(|word| folded.matches(word.as_str()).count())
            .sum()
    }

    pub fn analyze(&self, text: &str, word_count: usize) -> SentimentAnalysis {
        if word_count == 0 {
            return SentimentAnalysis::default();
        }

        let hits = self.negative_hits(text);
        let sentiment_score = (1.0 - 2.0 * hits as f64 / word_count as f64).clamp(-1.0, 1.0);

        SentimentAnalysis {
            sentiment_score,
            is_negative: sentiment_score < NEGATIVE_THRESHOLD,
        }
    }
}
