//! Line normalizer and deduplicator

use rollcall_domain::{KeywordMatcher, KeywordSet};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Output of one cleaning pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedLines {
    /// Surviving lines, trimmed, original casing, first-seen order
    pub lines: Vec<String>,
    /// Non-blank input lines
    pub input_count: usize,
}

impl CleanedLines {
    /// Lines dropped as keyword matches or duplicates
    pub fn removed_count(&self) -> usize {
        self.input_count.saturating_sub(self.lines.len())
    }

    /// `N unique lines (removed M duplicates or filtered lines)`
    pub fn summary(&self) -> String {
        summary_line(self.lines.len(), self.removed_count())
    }
}

pub(crate) fn summary_line(kept: usize, removed: usize) -> String {
    format!(
        "{} unique lines (removed {} duplicates or filtered lines)",
        kept, removed
    )
}

/// Why a line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    JobKeyword,
    DropKeyword,
    Duplicate,
}

/// Drops blank, keyword-matched and duplicate lines
///
/// Duplicates are compared by trimmed, lower-cased text; the first occurrence
/// survives. Keyword checks are case-insensitive.
pub struct LineCleaner {
    job_matcher: Option<Box<dyn KeywordMatcher>>,
    removal_keywords: KeywordSet,
}

impl LineCleaner {
    /// Create a cleaner
    ///
    /// Without a `job_matcher`, lines are never dropped for mentioning a job title.
    pub fn new(job_matcher: Option<Box<dyn KeywordMatcher>>, removal_keywords: KeywordSet) -> Self {
        Self {
            job_matcher,
            removal_keywords,
        }
    }

    /// Clean the whole text into one flat line sequence
    pub fn clean(&self, text: &str) -> CleanedLines {
        let mut seen = HashSet::new();
        let mut cleaned = CleanedLines::default();

        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            cleaned.input_count += 1;
            match self.check(line, &mut seen) {
                None => cleaned.lines.push(line.to_string()),
                Some(reason) => trace!("Dropped {:?}: {}", reason, line),
            }
        }

        debug!(
            "Cleaned {} lines down to {} (job matcher: {})",
            cleaned.input_count,
            cleaned.lines.len(),
            self.job_matcher.as_ref().map_or("none", |m| m.name())
        );
        cleaned
    }

    /// Clean the text into blank-line separated blocks
    ///
    /// Duplicates are only detected within a block, so two people sharing an
    /// office number each keep it. Blocks left empty are dropped.
    pub fn clean_blocks(&self, text: &str) -> Vec<Vec<String>> {
        let mut blocks = Vec::new();
        let mut current = Vec::new();
        let mut seen = HashSet::new();

        for line in text.lines().map(str::trim) {
            if line.is_empty() {
                if !current.is_empty() {
                    blocks.push(std::mem::take(&mut current));
                }
                seen.clear();
                continue;
            }
            match self.check(line, &mut seen) {
                None => current.push(line.to_string()),
                Some(reason) => trace!("Dropped {:?} in block: {}", reason, line),
            }
        }
        if !current.is_empty() {
            blocks.push(current);
        }

        debug!("Split text into {} blocks", blocks.len());
        blocks
    }

    fn check(&self, line: &str, seen: &mut HashSet<String>) -> Option<Rejection> {
        let lower = line.to_lowercase();

        if let Some(matcher) = &self.job_matcher {
            if matcher.find(&lower).is_some() {
                return Some(Rejection::JobKeyword);
            }
        }
        if self.removal_keywords.first_substring_of(&lower).is_some() {
            return Some(Rejection::DropKeyword);
        }
        if !seen.insert(lower) {
            return Some(Rejection::Duplicate);
        }
        None
    }
}
