/// Case-insensitive substring matcher over a fixed term list.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    terms: Vec<String>,
}

impl TermMatcher {
    /// Terms keep their list order; later duplicates (after case folding)
    /// are dropped.
    pub fn new(terms: &[String]) -> Self {
        let mut folded: Vec<String> = Vec::with_capacity(terms.len());
        for term in terms {
            let term = term.to_lowercase();
            if !term.is_empty() && !folded.contains(&term) {
                folded.push(term);
            }
        }
        Self { terms: folded }
    }

    /// Returns every term found in `text`, in list order.
    pub fn find_all(&self, text: &str) -> Vec<&str> {
        let text_lower = text.to_lowercase();
        self.terms
            .iter()
            .filter(|term| text_lower.contains(term.as_str()))
            .map(|term| term.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(terms: &[&str]) -> TermMatcher {
        let owned: Vec<String> = terms.iter().map(|t| t.to_string()).collect();
        TermMatcher::new(&owned)
    }

    #[test]
    fn test_matches_in_list_order() {
        let m = matcher(&["stupid", "idiot", "moron"]);
        assert_eq!(m.find_all("What a MORON, an Idiot really"), vec!["idiot", "moron"]);
    }

    #[test]
    fn test_duplicates_are_reported_once() {
        let m = matcher(&["idiot", "IDIOT", "jerk"]);
        assert_eq!(m.find_all("idiot idiot idiot"), vec!["idiot"]);
    }

    #[test]
    fn test_substring_semantics() {
        let m = matcher(&["hell"]);
        assert_eq!(m.find_all("Hello there"), vec!["hell"]);
        assert!(m.find_all("nothing here").is_empty());
    }

    #[test]
    fn test_phrases_match_across_words() {
        let m = matcher(&["shut up", "get lost"]);
        assert_eq!(m.find_all("Just SHUT UP already"), vec!["shut up"]);
    }
}
