use crate::config::ContextualCategory;
use anyhow::{Context, Result};
use regex::Regex;

#[derive(Debug, Clone)]
struct CompiledCategory {
    name: String,
    patterns: Vec<Regex>,
}

/// Named classes of harmful-intent language, each backed by its own pattern
/// set. A category reports at most once, on its first matching pattern.
#[derive(Debug, Clone)]
pub struct ContextualDetector {
    categories: Vec<CompiledCategory>,
}

impl ContextualDetector {
    pub fn new(categories: &[ContextualCategory]) -> Result<Self> {
        let categories = categories
            .iter()
            .map(|category| {
                let patterns = category
                    .patterns
                    .iter()
                    .map(|pattern| {
                        Regex::new(&format!("(?i){}", pattern)).with_context(|| {
                            format!(
                                "Invalid pattern in category '{}': {}",
                                category.name, pattern
                            )
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(CompiledCategory {
                    name: category.name.clone(),
                    patterns,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { categories })
    }

    /// Names of the categories that matched, in configured order.
    pub fn matched_categories(&self, text: &str) -> Vec<&str> {
        let mut matched = Vec::new();
        for category in &self.categories {
            for pattern in &category.patterns {
                if pattern.is_match(text) {
                    log::debug!("Contextual category '{}' matched {}", category.name, pattern);
                    matched.push(category.name.as_str());
                    // Only the first hit per category counts
                    break;
                }
            }
        }
        matched
    }
}
