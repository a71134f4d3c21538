use crate::config::{ModerationConfig, Thresholds};
use crate::normalization::TextNormalizer;
use crate::quality::{analyze_quality, paragraph_count};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

const TITLE_MIN_CHARS: usize = 20;
const TITLE_MAX_CHARS: usize = 80;
const CONTENT_MIN_WORDS: usize = 200;
const MIN_PARAGRAPHS: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestions {
    pub title: Vec<String>,
    pub content: Vec<String>,
}

/// Improvement hints for a draft. Which hints fire is a pure function of the
/// text; only the closing generic tip of each list is picked at random.
#[derive(Debug, Clone)]
pub struct SuggestionGenerator {
    thresholds: Thresholds,
    title_pool: Vec<String>,
    content_pool: Vec<String>,
    normalizer: TextNormalizer,
}

impl SuggestionGenerator {
    pub fn new(config: &ModerationConfig) -> Self {
        Self {
            thresholds: config.thresholds.clone(),
            title_pool: config.title_suggestions.clone(),
            content_pool: config.content_suggestions.clone(),
            normalizer: TextNormalizer::new(),
        }
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        content: &str,
        title: Option<&str>,
        rng: &mut R,
    ) -> Suggestions {
        let title = match title {
            Some(t) if !t.is_empty() => self.title_suggestions(t, rng),
            _ => Vec::new(),
        };

        Suggestions {
            title,
            content: self.content_suggestions(content, rng),
        }
    }

    fn title_suggestions<R: Rng + ?Sized>(&self, title: &str, rng: &mut R) -> Vec<String> {
        let mut suggestions = Vec::new();
        let length = title.chars().count();

        if length < TITLE_MIN_CHARS {
            suggestions.push(
                "Your title is quite short; consider making it more descriptive".to_string(),
            );
        } else if length > TITLE_MAX_CHARS {
            suggestions.push(format!(
                "Your title is long; consider trimming it to under {} characters",
                TITLE_MAX_CHARS
            ));
        }

        if let Some(tip) = self.title_pool.choose(rng) {
            suggestions.push(tip.clone());
        }
        suggestions
    }

    fn content_suggestions<R: Rng + ?Sized>(&self, content: &str, rng: &mut R) -> Vec<String> {
        let mut suggestions = Vec::new();
        let quality = analyze_quality(content);

        if quality.word_count < CONTENT_MIN_WORDS {
            suggestions.push(format!(
                "Consider expanding your content (currently {} words; aim for at least {})",
                quality.word_count, CONTENT_MIN_WORDS
            ));
        }

        if quality.unique_ratio < self.thresholds.min_unique_ratio {
            suggestions
                .push("Try varying your vocabulary to avoid repeating the same words".to_string());
        }

        if quality.avg_word_length < self.thresholds.min_avg_word_length {
            suggestions.push("Consider using more descriptive and specific words".to_string());
        }

        if quality.word_count > CONTENT_MIN_WORDS
            && paragraph_count(&self.normalizer.normalize(content)) < MIN_PARAGRAPHS
        {
            suggestions.push(format!(
                "Break your content into at least {} paragraphs to improve readability",
                MIN_PARAGRAPHS
            ));
        }

        if let Some(tip) = self.content_pool.choose(rng) {
            suggestions.push(tip.clone());
        }
        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generator() -> SuggestionGenerator {
        SuggestionGenerator::new(&ModerationConfig::default())
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn varied_paragraph(words: usize, offset: usize) -> String {
        (0..words)
            .map(|i| format!("sample{}", i + offset))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_no_title_means_no_title_suggestions() {
        let s = generator().generate("Some content", None, &mut rng());
        assert!(s.title.is_empty());
        let s = generator().generate("Some content", Some(""), &mut rng());
        assert!(s.title.is_empty());
    }

    #[test]
    fn test_short_title_hint_then_generic_tip() {
        let config = ModerationConfig::default();
        let s = generator().generate("Some content", Some("Hi"), &mut rng());
        assert_eq!(s.title.len(), 2);
        assert!(s.title[0].contains("short"));
        assert!(config.title_suggestions.contains(&s.title[1]));
    }

    #[test]
    fn test_long_title_hint() {
        let title = "word ".repeat(20);
        let s = generator().generate("Some content", Some(&title), &mut rng());
        assert!(s.title[0].contains("long"));
    }

    #[test]
    fn test_reasonable_title_gets_only_generic_tip() {
        let s = generator().generate(
            "Some content",
            Some("A practical guide to spring planting"),
            &mut rng(),
        );
        assert_eq!(s.title.len(), 1);
    }

    #[test]
    fn test_short_content_hints() {
        let s = generator().generate("a b c a b c", None, &mut rng());
        assert!(s.content[0].contains("currently 6 words"));
        assert!(s.content.iter().any(|c| c.contains("descriptive")));
        assert_eq!(s.content.len(), 3);
    }

    #[test]
    fn test_paragraph_hint_only_for_long_single_block() {
        let single = varied_paragraph(250, 0);
        let s = generator().generate(&single, None, &mut rng());
        assert!(s.content.iter().any(|c| c.contains("paragraphs")));

        let split = format!(
            "{}\n\n{}\n\n{}",
            varied_paragraph(90, 0),
            varied_paragraph(90, 100),
            varied_paragraph(90, 200)
        );
        let s = generator().generate(&split, None, &mut rng());
        assert!(!s.content.iter().any(|c| c.contains("paragraphs")));
        assert_eq!(s.content.len(), 1);
    }

    #[test]
    fn test_empty_content_still_gets_a_tip() {
        let s = generator().generate("", None, &mut rng());
        assert!(!s.content.is_empty());
    }

    #[test]
    fn test_same_seed_same_phrasing() {
        let a = generator().generate("Some content", Some("Hi"), &mut rng());
        let b = generator().generate("Some content", Some("Hi"), &mut rng());
        assert_eq!(a, b);
    }
}
