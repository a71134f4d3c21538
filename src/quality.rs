use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());
static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

const WORDS_PER_MINUTE: f64 = 225.0;

/// Structural statistics for a piece of text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityAnalysis {
    pub word_count: usize,
    pub unique_words: usize,
    pub unique_ratio: f64,
    pub avg_word_length: f64,
    pub readability_score: f64,
    pub estimated_reading_time: u32,
}

pub fn words(text: &str) -> Vec<&str> {
    WORD_RE.find_iter(text).map(|m| m.as_str()).collect()
}

pub fn sentence_count(text: &str) -> usize {
    SENTENCE_SPLIT_RE
        .split(text)
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

/// Paragraphs are segments separated by at least one blank line.
pub fn paragraph_count(text: &str) -> usize {
    let mut count = 0;
    let mut in_paragraph = false;
    for line in text.lines() {
        if line.trim().is_empty() {
            in_paragraph = false;
        } else if !in_paragraph {
            count += 1;
            in_paragraph = true;
        }
    }
    count
}

pub fn analyze_quality(text: &str) -> QualityAnalysis {
    let tokens = words(text);
    let word_count = tokens.len();
    if word_count == 0 {
        return QualityAnalysis::default();
    }

    let unique_words = tokens
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<HashSet<_>>()
        .len();
    let unique_ratio = unique_words as f64 / word_count as f64;

    let total_chars: usize = tokens.iter().map(|w| w.chars().count()).sum();
    let avg_word_length = total_chars as f64 / word_count as f64;

    let sentences = sentence_count(text);
    let readability_score = if sentences == 0 {
        0.0
    } else {
        0.6 * (word_count as f64 / sentences as f64) + 0.4 * avg_word_length
    };

    let estimated_reading_time = ((word_count as f64 / WORDS_PER_MINUTE).round() as u32).max(1);

    QualityAnalysis {
        word_count,
        unique_words,
        unique_ratio,
        avg_word_length,
        readability_score,
        estimated_reading_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_all_zero() {
        assert_eq!(analyze_quality(""), QualityAnalysis::default());
        assert_eq!(analyze_quality("  ...!?  "), QualityAnalysis::default());
    }

    #[test]
    fn test_basic_statistics() {
        let analysis = analyze_quality("The cat sat. The dog ran!");
        assert_eq!(analysis.word_count, 6);
        assert_eq!(analysis.unique_words, 5);
        assert!((analysis.unique_ratio - 5.0 / 6.0).abs() < 1e-9);
        assert!((analysis.avg_word_length - 3.0).abs() < 1e-9);
        // 0.6 * (6 / 2) + 0.4 * 3
        assert!((analysis.readability_score - 3.0).abs() < 1e-9);
        assert_eq!(analysis.estimated_reading_time, 1);
    }

    #[test]
    fn test_uniqueness_is_case_folded() {
        let analysis = analyze_quality("Word word WORD");
        assert_eq!(analysis.word_count, 3);
        assert_eq!(analysis.unique_words, 1);
    }

    #[test]
    fn test_terminator_runs_collapse() {
        assert_eq!(sentence_count("Really?!?! Yes... fine."), 3);
        assert_eq!(sentence_count("no terminator at all"), 1);
        assert_eq!(sentence_count(""), 0);
    }

    #[test]
    fn test_reading_time_rounds_to_minutes() {
        let text = "word ".repeat(450);
        assert_eq!(analyze_quality(&text).estimated_reading_time, 2);
        let text = "word ".repeat(600);
        assert_eq!(analyze_quality(&text).estimated_reading_time, 3);
    }

    #[test]
    fn test_underscores_and_digits_are_word_characters() {
        let analysis = analyze_quality("snake_case v2 ok");
        assert_eq!(analysis.word_count, 3);
    }

    #[test]
    fn test_paragraph_count() {
        assert_eq!(paragraph_count(""), 0);
        assert_eq!(paragraph_count("one\ntwo"), 1);
        assert_eq!(paragraph_count("one\n\ntwo\n   \nthree"), 3);
        assert_eq!(paragraph_count("\n\nlead\n\n\n\ntail\n"), 2);
    }
}
