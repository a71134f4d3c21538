use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static PUNCTUATION_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\?{3,}|!{3,}").unwrap());

const CAPS_MIN_TOKEN_LEN: usize = 2;
const CAPS_MAX_TOKENS: usize = 3;
const CAPS_MAX_RATIO: f64 = 0.2;
const CAPS_RATIO_MIN_TOKENS: usize = 10;
const MAX_EXCLAMATIONS: usize = 5;
const TITLE_MIN_SHOUT_LEN: usize = 5;

/// True when the text has at least one uppercase letter and no lowercase ones.
pub fn is_all_caps(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}

pub fn has_aggressive_capitalization(text: &str) -> bool {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() {
        return false;
    }

    let caps = tokens
        .iter()
        .filter(|token| token.chars().count() > CAPS_MIN_TOKEN_LEN && is_all_caps(token))
        .count();

    caps > CAPS_MAX_TOKENS
        || (caps as f64 / tokens.len() as f64 > CAPS_MAX_RATIO
            && tokens.len() > CAPS_RATIO_MIN_TOKENS)
}

pub fn has_excessive_exclamations(text: &str) -> bool {
    text.matches('!').count() > MAX_EXCLAMATIONS
}

pub fn has_punctuation_run(text: &str) -> bool {
    PUNCTUATION_RUN_RE.is_match(text)
}

pub fn is_shouting_title(title: &str) -> bool {
    title.chars().count() > TITLE_MIN_SHOUT_LEN && is_all_caps(title)
}

/// Any run of `min_run` identical non-whitespace characters.
pub fn has_repeated_run(text: &str, min_run: usize) -> bool {
    let mut previous = None;
    let mut run = 0;
    for ch in text.chars() {
        if ch.is_whitespace() {
            previous = None;
            run = 0;
            continue;
        }
        if previous == Some(ch) {
            run += 1;
        } else {
            previous = Some(ch);
            run = 1;
        }
        if run >= min_run {
            return true;
        }
    }
    false
}

/// Formatting patterns worth a warning but not a rejection.
#[derive(Debug, Clone)]
pub struct SuspiciousPatterns {
    patterns: Vec<Regex>,
    repeated_char_run: usize,
}

impl SuspiciousPatterns {
    pub fn new(patterns: &[String], repeated_char_run: usize) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Regex::new(p).with_context(|| format!("Invalid suspicious pattern: {}", p))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            patterns,
            repeated_char_run,
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        has_repeated_run(text, self.repeated_char_run)
            || self.patterns.iter().any(|re| re.is_match(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_caps() {
        assert!(is_all_caps("LOUD"));
        assert!(is_all_caps("TONE."));
        assert!(is_all_caps("R2D2"));
        assert!(!is_all_caps("Loud"));
        assert!(!is_all_caps("123"));
        assert!(!is_all_caps(""));
    }

    #[test]
    fn test_caps_absolute_count() {
        assert!(has_aggressive_capitalization("THIS REALLY VERY LOUD TEXT here"));
        assert!(!has_aggressive_capitalization("THIS WAS VERY quiet"));
    }

    #[test]
    fn test_caps_ratio_needs_enough_tokens() {
        // 3 of 10 tokens shouted, but the ratio rule only applies above 10 tokens
        assert!(!has_aggressive_capitalization(
            "one two three four five six seven EIGHT NINE TEN"
        ));
        // 3 of 11 tokens is above 0.2
        assert!(has_aggressive_capitalization(
            "one two three four five six seven eight NINE TEN ELEVEN"
        ));
    }

    #[test]
    fn test_short_caps_tokens_are_ignored() {
        assert!(!has_aggressive_capitalization("OK OK OK OK OK IT IS"));
        assert!(!has_aggressive_capitalization(""));
    }

    #[test]
    fn test_exclamations() {
        assert!(!has_excessive_exclamations("Wow! Great! Nice! Cool! Yes!"));
        assert!(has_excessive_exclamations("a! b! c! d! e! f!"));
    }

    #[test]
    fn test_punctuation_runs() {
        assert!(has_punctuation_run("What???"));
        assert!(has_punctuation_run("Stop!!!"));
        assert!(!has_punctuation_run("Really?!"));
        assert!(!has_punctuation_run("Hmm?? ok!!"));
    }

    #[test]
    fn test_shouting_title() {
        assert!(is_shouting_title("THIS IS SHOUTING"));
        assert!(!is_shouting_title("NEWS"));
        assert!(!is_shouting_title("This is calm"));
    }

    #[test]
    fn test_repeated_run() {
        assert!(has_repeated_run("soooooo good", 5));
        assert!(!has_repeated_run("soooo good", 5));
        assert!(!has_repeated_run("a     b", 3));
    }

    #[test]
    fn test_suspicious_patterns() {
        let patterns = SuspiciousPatterns::new(
            &[r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}".to_string()],
            5,
        )
        .unwrap();
        assert!(patterns.is_match("write to someone@example.com today"));
        assert!(patterns.is_match("niiiiiice"));
        assert!(!patterns.is_match("a perfectly ordinary sentence"));
    }
}
