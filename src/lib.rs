pub mod config;
pub mod detection;
pub mod moderator;
pub mod normalization;
pub mod quality;
pub mod scoring;
pub mod sentiment;
pub mod suggestions;

pub use config::ModerationConfig;
pub use moderator::{ContentModerator, ModerationResult};
pub use quality::QualityAnalysis;
pub use sentiment::SentimentAnalysis;
pub use suggestions::Suggestions;
