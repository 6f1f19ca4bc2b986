//! Request and response types for extraction

use crate::config::SegmentMode;
use crate::dedup::summary_line;
use rollcall_domain::ContactRecord;

/// Request to clean and extract contacts from pasted text
#[derive(Debug, Clone, Default)]
pub struct ExtractionRequest {
    /// The pasted block
    pub raw_text: String,

    /// Replaces the built-in job titles when non-empty
    pub include_titles: Option<Vec<String>>,

    /// Removed (exact match) from the job titles
    pub exclude_titles: Option<Vec<String>>,

    /// Added to the built-in drop keywords
    pub extra_drop_keywords: Option<Vec<String>>,

    /// Overrides the configured segmentation mode
    pub mode: Option<SegmentMode>,

    /// Overrides the configured job keyword match mode
    pub fuzzy_job_match: Option<bool>,
}

impl ExtractionRequest {
    /// Create a request with default settings
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            ..Self::default()
        }
    }

    /// Replace the built-in job titles
    pub fn with_include_titles(mut self, titles: Vec<String>) -> Self {
        self.include_titles = Some(titles);
        self
    }

    /// Exclude job titles
    pub fn with_exclude_titles(mut self, titles: Vec<String>) -> Self {
        self.exclude_titles = Some(titles);
        self
    }

    /// Add drop keywords
    pub fn with_extra_drop_keywords(mut self, keywords: Vec<String>) -> Self {
        self.extra_drop_keywords = Some(keywords);
        self
    }

    /// Override the segmentation mode
    pub fn with_mode(mut self, mode: SegmentMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Override fuzzy job keyword matching
    pub fn with_fuzzy_job_match(mut self, fuzzy: bool) -> Self {
        self.fuzzy_job_match = Some(fuzzy);
        self
    }
}

/// Result of an extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Deduplicated, filtered lines in first-seen order
    pub cleaned_lines: Vec<String>,

    /// Non-blank input lines
    pub input_line_count: usize,

    /// Lines dropped as keyword matches or duplicates
    pub removed_count: usize,

    /// Sealed contacts in input order
    pub contacts: Vec<ContactRecord>,
}

/// Whether a run produced any contacts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// At least one contact, with the count
    Extracted(usize),
    /// Valid input, but no contacts
    NothingExtracted,
}

impl ExtractionResult {
    /// Distinguish "nothing extracted" from a normal run
    pub fn outcome(&self) -> ExtractionOutcome {
        match self.contacts.len() {
            0 => ExtractionOutcome::NothingExtracted,
            n => ExtractionOutcome::Extracted(n),
        }
    }

    /// `N unique lines (removed M duplicates or filtered lines)`
    pub fn summary(&self) -> String {
        summary_line(self.cleaned_lines.len(), self.removed_count)
    }

    /// Newline-joined cleaned lines
    pub fn text_payload(&self) -> String {
        self.cleaned_lines.join("\n")
    }
}
