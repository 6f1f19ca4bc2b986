//! Trait definitions for pluggable heuristics
//!
//! These traits define the seams between the fixed pipeline and the
//! swappable matching / assignment rules. Implementations live in
//! rollcall-extractor.

use crate::CandidateRecord;

/// Decides whether text matches a keyword vocabulary
///
/// Exact (substring) and fuzzy (edit-similarity) matching share this
/// contract so the line cleaner never knows which one it is using.
pub trait KeywordMatcher: Send + Sync {
    /// Return the vocabulary entry matched by `text_lower`, if any
    ///
    /// `text_lower` must already be lower-cased.
    fn find(&self, text_lower: &str) -> Option<&str>;

    /// Short strategy name for logging
    fn name(&self) -> &'static str;
}

/// Assigns free-text segments of a delimited line to record fields
///
/// The classifier has already pulled out email and phone numbers; a strategy
/// only decides what the remaining plain segments (no digits, no `@`, no
/// phone keyword) mean. Strategies must only fill empty fields.
pub trait SegmentStrategy: Send + Sync {
    /// Populate `record` from `line` and its plain segments
    ///
    /// `plain_segments` is empty when the line has no delimiters.
    fn assign(&self, line: &str, plain_segments: &[&str], record: &mut CandidateRecord);

    /// Short strategy name for logging
    fn name(&self) -> &'static str;
}
