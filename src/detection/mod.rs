pub mod contextual;
pub mod lexicon;
pub mod tone;

use crate::config::{ModerationConfig, Thresholds};
use anyhow::Result;
use contextual::ContextualDetector;
use lexicon::TermMatcher;
use tone::SuspiciousPatterns;

/// Outcome of the rule checks. `reasons` block publication, `warnings` don't.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleFindings {
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
}

impl RuleFindings {
    pub fn is_clean(&self) -> bool {
        self.reasons.is_empty()
    }
}

pub struct RuleClassifier {
    thresholds: Thresholds,
    banned_words: TermMatcher,
    inappropriate_phrases: TermMatcher,
    suspicious: SuspiciousPatterns,
    contextual: ContextualDetector,
}

impl RuleClassifier {
    pub fn new(config: &ModerationConfig) -> Result<Self> {
        Ok(Self {
            thresholds: config.thresholds.clone(),
            banned_words: TermMatcher::new(&config.banned_words),
            inappropriate_phrases: TermMatcher::new(&config.inappropriate_phrases),
            suspicious: SuspiciousPatterns::new(
                &config.suspicious_patterns,
                config.repeated_char_run,
            )?,
            contextual: ContextualDetector::new(&config.contextual_categories)?,
        })
    }

    /// Runs every check against already-normalized text. Checks never
    /// short-circuit, so several reasons can be reported together.
    pub fn classify(&self, text: &str, title: Option<&str>) -> RuleFindings {
        let mut findings = RuleFindings::default();

        let length = text.chars().count();
        if length < self.thresholds.min_content_length {
            findings.reasons.push(format!(
                "Content too short (minimum {} characters)",
                self.thresholds.min_content_length
            ));
        } else if length > self.thresholds.max_content_length {
            findings.reasons.push(format!(
                "Content too long (maximum {} characters)",
                self.thresholds.max_content_length
            ));
        }

        let banned = self.banned_words.find_all(text);
        if !banned.is_empty() {
            findings
                .reasons
                .push(format!("Banned words detected: {}", banned.join(", ")));
        }

        let phrases = self.inappropriate_phrases.find_all(text);
        if !phrases.is_empty() {
            findings.reasons.push(format!(
                "Inappropriate phrases detected: {}",
                phrases.join(", ")
            ));
        }

        if self.suspicious.is_match(text) {
            findings
                .warnings
                .push("Suspicious formatting patterns detected".to_string());
        }

        if tone::has_aggressive_capitalization(text) {
            findings.reasons.push(
                "Aggressive tone detected (excessive use of capital letters)".to_string(),
            );
        }

        if tone::has_excessive_exclamations(text) {
            findings
                .warnings
                .push("Aggressive tone detected (excessive exclamation marks)".to_string());
        }

        if title.is_some_and(tone::is_shouting_title) {
            findings
                .reasons
                .push("Aggressive tone in title (all capital letters)".to_string());
        }

        if tone::has_punctuation_run(text) {
            findings
                .reasons
                .push("Aggressive tone detected (excessive punctuation)".to_string());
        }

        for category in self.contextual.matched_categories(text) {
            findings.reasons.push(format!(
                "Potentially harmful content detected ({})",
                category
            ));
        }

        findings
    }
}
