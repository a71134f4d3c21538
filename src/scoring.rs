use crate::config::Thresholds;
use crate::quality::QualityAnalysis;
use crate::sentiment::SentimentAnalysis;

const FACTOR_WEIGHT: f64 = 25.0;
const TARGET_WORD_COUNT: f64 = 500.0;
const TARGET_UNIQUE_RATIO: f64 = 0.6;
const TARGET_AVG_WORD_LENGTH: f64 = 5.0;
const DIVERSITY_MIN_WORDS: usize = 100;

/// Combines length, lexical diversity, word complexity and sentiment into a
/// 0-100 score. Each factor is capped at 1 and weighted equally.
pub fn quality_score(quality: &QualityAnalysis, sentiment: &SentimentAnalysis) -> f64 {
    if quality.word_count == 0 {
        return 0.0;
    }

    let factors = [
        quality.word_count as f64 / TARGET_WORD_COUNT,
        quality.unique_ratio / TARGET_UNIQUE_RATIO,
        quality.avg_word_length / TARGET_AVG_WORD_LENGTH,
        (sentiment.sentiment_score + 1.0) / 2.0,
    ];

    factors
        .iter()
        .map(|f| f.clamp(0.0, 1.0) * FACTOR_WEIGHT)
        .sum()
}

/// Non-blocking observations derived from the same statistics as the score.
pub fn quality_warnings(
    quality: &QualityAnalysis,
    sentiment: &SentimentAnalysis,
    thresholds: &Thresholds,
) -> Vec<String> {
    let mut warnings = Vec::new();

    if quality.word_count > DIVERSITY_MIN_WORDS && quality.unique_ratio < thresholds.min_unique_ratio
    {
        warnings.push("Low vocabulary diversity (consider varying your word choice)".to_string());
    }

    if sentiment.is_negative {
        warnings.push("Content has a predominantly negative tone".to_string());
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quality(word_count: usize, unique_ratio: f64, avg_word_length: f64) -> QualityAnalysis {
        QualityAnalysis {
            word_count,
            unique_words: (word_count as f64 * unique_ratio) as usize,
            unique_ratio,
            avg_word_length,
            readability_score: 0.0,
            estimated_reading_time: 1,
        }
    }

    fn sentiment(score: f64) -> SentimentAnalysis {
        SentimentAnalysis {
            sentiment_score: score,
            is_negative: score < -0.3,
        }
    }

    #[test]
    fn test_zero_words_scores_zero() {
        assert_eq!(quality_score(&QualityAnalysis::default(), &sentiment(1.0)), 0.0);
    }

    #[test]
    fn test_all_factors_capped() {
        let score = quality_score(&quality(2000, 1.0, 9.0), &sentiment(1.0));
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_factor_arithmetic() {
        // 25 * (250/500) + 25 * (0.3/0.6) + 25 * (2.5/5) + 25 * (0/2 + 0.5)
        let score = quality_score(&quality(250, 0.3, 2.5), &sentiment(0.0));
        assert!((score - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_most_negative_sentiment_contributes_nothing() {
        let score = quality_score(&quality(500, 0.6, 5.0), &sentiment(-1.0));
        assert!((score - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_texts_are_exempt_from_diversity_warning() {
        let thresholds = Thresholds::default();
        let warnings = quality_warnings(&quality(80, 0.1, 4.0), &sentiment(1.0), &thresholds);
        assert!(warnings.is_empty());

        let warnings = quality_warnings(&quality(150, 0.1, 4.0), &sentiment(1.0), &thresholds);
        assert_eq!(
            warnings,
            vec!["Low vocabulary diversity (consider varying your word choice)".to_string()]
        );
    }

    #[test]
    fn test_negative_tone_warning() {
        let warnings =
            quality_warnings(&quality(20, 0.9, 4.0), &sentiment(-0.5), &Thresholds::default());
        assert_eq!(
            warnings,
            vec!["Content has a predominantly negative tone".to_string()]
        );
    }
}
