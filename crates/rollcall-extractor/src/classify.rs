//! Field classifier: pulls Name / Title / Email / phones out of a line or block
//!
//! Rule precedence, each rule filling a different field:
//!
//! 1. Email: first address in the text
//! 2. Phones: first matching category rule per line
//! 3. Name: capitalized multi-word run
//! 4. Title: title vocabulary entry
//!
//! Delimited lines hand their plain segments to the configured
//! [`SegmentStrategy`]. Nothing ever overwrites a populated field.

use crate::patterns::{self, PhonePatterns};
use crate::strategy;
use regex::Regex;
use rollcall_domain::{CandidateRecord, ContactField, KeywordSet, SegmentStrategy};
use tracing::warn;

/// Classifies text into contact fields
pub struct FieldClassifier<'a> {
    phones: &'a PhonePatterns,
    title_vocabulary: KeywordSet,
    title_phrases: Vec<Regex>,
    strategy: Box<dyn SegmentStrategy>,
}

impl<'a> FieldClassifier<'a> {
    /// Create a classifier
    ///
    /// An empty `title_vocabulary` disables title detection by vocabulary.
    pub fn new(
        phones: &'a PhonePatterns,
        title_vocabulary: KeywordSet,
        strategy: Box<dyn SegmentStrategy>,
    ) -> Self {
        let title_phrases = title_vocabulary
            .iter()
            .filter_map(|entry| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(entry));
                match Regex::new(&pattern) {
                    Ok(re) => Some(re),
                    Err(e) => {
                        warn!("Skipping title '{}': {}", entry, e);
                        None
                    }
                }
            })
            .collect();

        Self {
            phones,
            title_vocabulary,
            title_phrases,
            strategy,
        }
    }

    /// Name of the segment strategy in use
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Classify a single line into `record`
    pub fn classify_line(&self, line: &str, record: &mut CandidateRecord) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        if let Some(email) = patterns::find_email(line) {
            record.fill(ContactField::Email, email);
        }
        self.classify_phone(line, record);

        if let Some(plain) = strategy::plain_segments(line, self.phones) {
            self.strategy.assign(line, &plain, record);
            return;
        }

        if patterns::is_name_line(line) && !self.is_title_line(line) {
            record.fill(ContactField::Name, line);
        } else if self.is_title_line(line) {
            record.fill(ContactField::Title, line);
        } else {
            self.strategy.assign(line, &[], record);
        }
    }

    /// Classify a whole block (its lines joined by newlines) into `record`
    ///
    /// The segment strategy sees the block flattened to one line with no
    /// plain segments, so only strategies that read undelimited text (the
    /// inline run) fill fields here. Name lines and vocabulary titles then
    /// fill whatever is still empty.
    pub fn classify_block(&self, block: &str, record: &mut CandidateRecord) {
        if let Some(email) = patterns::find_email(block) {
            record.fill(ContactField::Email, email);
        }
        for line in block.lines() {
            self.classify_phone(line, record);
        }

        let flattened = block
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        self.strategy.assign(&flattened, &[], record);

        let name_line = block
            .lines()
            .map(str::trim)
            .find(|l| patterns::is_name_line(l) && !self.is_title_line(l));
        if let Some(name) = name_line.or_else(|| patterns::find_name_run(block)) {
            record.fill(ContactField::Name, name);
        }

        if let Some(title) = self.find_title_phrase(block) {
            record.fill(ContactField::Title, title);
        }
    }

    /// Whether the whole line is a title vocabulary entry
    pub fn is_title_line(&self, line: &str) -> bool {
        self.title_vocabulary.contains(line)
    }

    /// First vocabulary entry (in vocabulary order) found as a bounded phrase
    pub fn find_title_phrase<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.title_phrases
            .iter()
            .find_map(|re| re.find(text).map(|m| m.as_str()))
    }

    fn classify_phone(&self, line: &str, record: &mut CandidateRecord) {
        if let Some((category, number)) = self.phones.find(line) {
            record.fill(category.field(), number);
        }
    }
}
