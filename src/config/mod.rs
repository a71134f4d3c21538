pub mod loader;

use crate::detection::RuleClassifier;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Every table and threshold the engine reads. Built once at startup and
/// never mutated afterwards.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ModerationConfig {
    pub thresholds: Thresholds,
    pub banned_words: Vec<String>,
    pub inappropriate_phrases: Vec<String>,
    pub suspicious_patterns: Vec<String>,
    pub repeated_char_run: usize,
    pub contextual_categories: Vec<ContextualCategory>,
    pub negative_lexicon: Vec<String>,
    pub title_suggestions: Vec<String>,
    pub content_suggestions: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Thresholds {
    pub min_content_length: usize,
    pub max_content_length: usize,
    pub min_avg_word_length: f64,
    pub min_unique_ratio: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ContextualCategory {
    pub name: String,
    pub patterns: Vec<String>,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_content_length: 50,
            max_content_length: 10_000,
            min_avg_word_length: 4.0,
            min_unique_ratio: 0.4,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            banned_words: strings(&[
                "profanity",
                "insult",
                "stupid",
                "idiot",
                "moron",
                "hate",
                "dumb",
                "damn",
                "hell",
                "jerk",
                "ass",
                "crap",
                "shit",
            ]),
            inappropriate_phrases: strings(&[
                "shut up",
                "screw you",
                "get lost",
                "nobody cares",
                "piece of garbage",
                "waste of space",
                "go away",
            ]),
            suspicious_patterns: strings(&[
                // Long uppercase runs
                r"[A-Z]{10,}",
                // Mixed punctuation runs
                r"[!?.,;:]{4,}",
                // Embedded email addresses
                r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}",
            ]),
            repeated_char_run: 5,
            contextual_categories: vec![
                ContextualCategory {
                    name: "harassment".to_string(),
                    patterns: strings(&[
                        r"\byou(?:'re| are) (?:so |such an? )?(?:worthless|pathetic|useless|ugly)\b",
                        r"\bnobody (?:likes|wants|loves) you\b",
                        r"\b(?:kill|hurt) yourself\b",
                        r"\beveryone (?:hates|laughs at) you\b",
                    ]),
                },
                ContextualCategory {
                    name: "threats".to_string(),
                    patterns: strings(&[
                        r"\bi(?:'m| am)? (?:going to|gonna|will) (?:hurt|kill|find|destroy) you\b",
                        r"\bwatch your back\b",
                        r"\byou(?:'ll| will) (?:regret|pay for) (?:this|it)\b",
                        r"\bi know where you live\b",
                    ]),
                },
                ContextualCategory {
                    name: "discrimination".to_string(),
                    patterns: strings(&[
                        r"\bgo back to (?:your|where you came from)\b",
                        r"\binferior (?:race|people|gender)\b",
                        r"\b(?:all|those) \w+ people are (?:lazy|criminals|animals|inferior)\b",
                        r"\bdon'?t belong (?:here|in this country)\b",
                    ]),
                },
            ],
            negative_lexicon: strings(&[
                "bad",
                "terrible",
                "awful",
                "horrible",
                "worst",
                "angry",
                "sad",
                "disappointing",
                "poor",
                "ugly",
                "disgusting",
                "annoying",
                "useless",
                "failure",
                "pathetic",
                "miserable",
            ]),
            title_suggestions: strings(&[
                "Try opening the title with a strong, specific keyword",
                "Consider phrasing the title as a question to spark curiosity",
                "Mention the main benefit for the reader in the title",
                "Use active verbs to make the title more engaging",
            ]),
            content_suggestions: strings(&[
                "Open with a hook that tells readers why the topic matters",
                "Close with a short summary or a call to action",
                "Support key claims with a concrete example or data point",
                "Break up dense passages with subheadings or lists",
                "Read the post aloud once to catch awkward phrasing",
            ]),
        }
    }
}

impl ModerationConfig {
    /// Checks the invariants the engine relies on, including that every
    /// configured pattern compiles in the detectors that use it.
    pub fn validate(&self) -> Result<()> {
        self.validate_settings()?;
        RuleClassifier::new(self)?;
        Ok(())
    }

    /// Thresholds and pools only; pattern compilation happens when the
    /// detectors are built.
    pub(crate) fn validate_settings(&self) -> Result<()> {
        let t = &self.thresholds;
        if t.min_content_length > t.max_content_length {
            bail!(
                "min_content_length ({}) exceeds max_content_length ({})",
                t.min_content_length,
                t.max_content_length
            );
        }
        if !(0.0..=1.0).contains(&t.min_unique_ratio) {
            bail!("min_unique_ratio must be within [0, 1], got {}", t.min_unique_ratio);
        }
        if t.min_avg_word_length < 0.0 {
            bail!("min_avg_word_length must not be negative");
        }
        if self.repeated_char_run < 2 {
            bail!("repeated_char_run must be at least 2");
        }
        if self.title_suggestions.is_empty() || self.content_suggestions.is_empty() {
            bail!("suggestion pools must not be empty");
        }
        Ok(())
    }
}
