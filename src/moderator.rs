//! Moderation entry point
//!
//! Composes normalization, rule classification, quality analysis, sentiment,
//! scoring and suggestions into a single [`ModerationResult`].

use crate::config::{ModerationConfig, Thresholds};
use crate::detection::RuleClassifier;
use crate::normalization::TextNormalizer;
use crate::quality::{analyze_quality, QualityAnalysis};
use crate::scoring::{quality_score, quality_warnings};
use crate::sentiment::{SentimentAnalysis, SentimentEstimator};
use crate::suggestions::{SuggestionGenerator, Suggestions};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationResult {
    pub approved: bool,
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
    pub quality_score: f64,
    pub quality_analysis: QualityAnalysis,
    pub sentiment_analysis: SentimentAnalysis,
    pub suggestions: Suggestions,
    pub moderation_timestamp: DateTime<Utc>,
}

impl ModerationResult {
    /// Reasons joined the way a flagged record stores its explanation.
    pub fn flattened_reasons(&self) -> Option<String> {
        flatten(&self.reasons)
    }

    pub fn flattened_warnings(&self) -> Option<String> {
        flatten(&self.warnings)
    }
}

fn flatten(items: &[String]) -> Option<String> {
    if items.is_empty() {
        None
    } else {
        Some(items.join(", "))
    }
}

/// Holds only immutable, pre-compiled tables, so one instance can be shared
/// across threads and called concurrently.
pub struct ContentModerator {
    thresholds: Thresholds,
    normalizer: TextNormalizer,
    classifier: RuleClassifier,
    sentiment: SentimentEstimator,
    suggestions: SuggestionGenerator,
}

impl ContentModerator {
    pub fn new(config: ModerationConfig) -> Result<Self> {
        config
            .validate_settings()
            .context("Invalid moderation config")?;
        let classifier = RuleClassifier::new(&config).context("Invalid moderation config")?;

        Ok(Self {
            classifier,
            sentiment: SentimentEstimator::new(&config.negative_lexicon),
            suggestions: SuggestionGenerator::new(&config),
            normalizer: TextNormalizer::new(),
            thresholds: config.thresholds,
        })
    }

    /// Moderator over the built-in tables.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ModerationConfig::default())
    }

    pub fn evaluate(&self, content: &str, title: Option<&str>) -> ModerationResult {
        self.evaluate_with_rng(content, title, &mut rand::thread_rng())
    }

    pub fn evaluate_with_rng<R: Rng + ?Sized>(
        &self,
        content: &str,
        title: Option<&str>,
        rng: &mut R,
    ) -> ModerationResult {
        let text = self.normalizer.normalize(content);
        let normalized_title = title.map(|t| self.normalizer.normalize(t));

        let findings = self.classifier.classify(&text, normalized_title.as_deref());

        let quality_analysis = analyze_quality(&text);
        let sentiment_analysis = self.sentiment.analyze(&text, quality_analysis.word_count);
        let quality_score = quality_score(&quality_analysis, &sentiment_analysis);

        let mut warnings = findings.warnings;
        warnings.extend(quality_warnings(
            &quality_analysis,
            &sentiment_analysis,
            &self.thresholds,
        ));

        let suggestions = self.suggestions.generate(content, title, rng);
        let reasons = findings.reasons;
        let approved = reasons.is_empty();

        log::debug!(
            "Moderation evaluated: approved={}, reasons={}, warnings={}, score={:.1}",
            approved,
            reasons.len(),
            warnings.len(),
            quality_score
        );

        ModerationResult {
            approved,
            reasons,
            warnings,
            quality_score,
            quality_analysis,
            sentiment_analysis,
            suggestions,
            moderation_timestamp: Utc::now(),
        }
    }

    /// Suggestions alone, without the full evaluation.
    pub fn suggest(&self, content: &str, title: Option<&str>) -> Suggestions {
        self.suggest_with_rng(content, title, &mut rand::thread_rng())
    }

    pub fn suggest_with_rng<R: Rng + ?Sized>(
        &self,
        content: &str,
        title: Option<&str>,
        rng: &mut R,
    ) -> Suggestions {
        self.suggestions.generate(content, title, rng)
    }
}
