//! Job keyword matchers: exact substring and fuzzy word similarity

use crate::config::MatchMode;
use rollcall_domain::{KeywordMatcher, KeywordSet};

/// Case-insensitive substring matching
///
/// Phrase-aware but not word-bounded: `"lead"` matches inside `"leadership"`.
#[derive(Debug, Clone)]
pub struct ExactMatcher {
    keywords: KeywordSet,
}

impl ExactMatcher {
    /// Create a matcher over `keywords`
    pub fn new(keywords: KeywordSet) -> Self {
        Self { keywords }
    }
}

impl KeywordMatcher for ExactMatcher {
    fn find(&self, text_lower: &str) -> Option<&str> {
        self.keywords.first_substring_of(text_lower)
    }

    fn name(&self) -> &'static str {
        "exact"
    }
}

/// Word-level approximate matching
///
/// Each whitespace-delimited word (edge punctuation stripped) is compared with
/// every keyword by normalized Levenshtein similarity; the best-scoring keyword
/// is accepted when it reaches the threshold.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    keywords: KeywordSet,
    threshold: f64,
}

impl FuzzyMatcher {
    /// Create a matcher over `keywords` with an acceptance threshold in [0, 1]
    pub fn new(keywords: KeywordSet, threshold: f64) -> Self {
        Self {
            keywords,
            threshold,
        }
    }

    /// Closest keyword to a single lower-cased word, with its similarity
    pub fn closest(&self, word: &str) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for keyword in self.keywords.iter() {
            let score = strsim::normalized_levenshtein(word, keyword);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((keyword, score));
            }
        }
        best
    }
}

impl KeywordMatcher for FuzzyMatcher {
    fn find(&self, text_lower: &str) -> Option<&str> {
        text_lower
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|w| !w.is_empty())
            .find_map(|word| {
                self.closest(word)
                    .filter(|(_, score)| *score >= self.threshold)
                    .map(|(keyword, _)| keyword)
            })
    }

    fn name(&self) -> &'static str {
        "fuzzy"
    }
}

/// Build the matcher selected by `mode`
pub fn build_matcher(
    mode: MatchMode,
    keywords: KeywordSet,
    threshold: f64,
) -> Box<dyn KeywordMatcher> {
    match mode {
        MatchMode::Exact => Box::new(ExactMatcher::new(keywords)),
        MatchMode::Fuzzy => Box::new(FuzzyMatcher::new(keywords, threshold)),
    }
}
