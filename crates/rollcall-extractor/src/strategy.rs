//! Segment strategies: how plain segments of a line become Name / Title
//!
//! All of these are positional heuristics. They misclassify when the input
//! shape differs from what they assume (e.g. a title spanning two delimited
//! segments); pick the strategy that fits the pasted layout.

use crate::config::StrategyKind;
use crate::patterns::PhonePatterns;
use once_cell::sync::Lazy;
use regex::Regex;
use rollcall_domain::{CandidateRecord, ContactField, SegmentStrategy};

static DELIMITER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+-\s+|[–—•·|,]").expect("delimiter pattern"));

// Name run, free-text title, email:
// "John Allen Smith Editor john@acme.com"
static INLINE_RUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?P<name>\p{Lu}\p{Ll}+(?:\s\p{Lu}\p{Ll}+)+)\s+(?P<title>[\w\s&/–-]+?)\s+(?P<email>\b[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}\b)",
    )
    .expect("inline run pattern")
});

/// Split a line on dash / em-dash / bullet / pipe / comma delimiters
///
/// Hyphens only delimit when surrounded by whitespace, so phone numbers and
/// hyphenated names stay intact. Empty segments are dropped.
pub fn split_segments(line: &str) -> Vec<&str> {
    DELIMITER_RE
        .split(line)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// A segment with no digits, no `@` and no phone keyword
pub fn is_plain_segment(segment: &str, phones: &PhonePatterns) -> bool {
    !segment.is_empty()
        && !segment.chars().any(|c| c.is_ascii_digit())
        && !segment.contains('@')
        && !phones.mentions_keyword(segment)
}

/// Fill `targets` in order with successive plain segments, skipping targets
/// that are already populated
fn fill_in_order(targets: &[ContactField], plain_segments: &[&str], record: &mut CandidateRecord) {
    let open: Vec<ContactField> = targets.iter().copied().filter(|f| !record.has(*f)).collect();
    for (field, segment) in open.into_iter().zip(plain_segments) {
        record.fill(field, *segment);
    }
}

/// First plain segment → Name, next → Title
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalStrategy;

impl SegmentStrategy for PositionalStrategy {
    fn assign(&self, _line: &str, plain_segments: &[&str], record: &mut CandidateRecord) {
        fill_in_order(&[ContactField::Name, ContactField::Title], plain_segments, record);
    }

    fn name(&self) -> &'static str {
        "positional"
    }
}

/// First plain segment → Title, next → Name
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleFirstStrategy;

impl SegmentStrategy for TitleFirstStrategy {
    fn assign(&self, _line: &str, plain_segments: &[&str], record: &mut CandidateRecord) {
        fill_in_order(&[ContactField::Title, ContactField::Name], plain_segments, record);
    }

    fn name(&self) -> &'static str {
        "title_first"
    }
}

/// Capitalized name run, then title text, then an email, on one line
///
/// Falls back to positional assignment when the line has delimiters but no
/// inline run.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineRunStrategy;

impl SegmentStrategy for InlineRunStrategy {
    fn assign(&self, line: &str, plain_segments: &[&str], record: &mut CandidateRecord) {
        if let Some(caps) = INLINE_RUN_RE.captures(line) {
            let name = caps.name("name").map_or("", |m| m.as_str());
            let title = caps.name("title").map_or("", |m| m.as_str().trim());
            let (name, title) = split_inline_title(name, title);
            record.fill(ContactField::Name, name);
            record.fill(ContactField::Title, title);
            if let Some(email) = caps.name("email") {
                record.fill(ContactField::Email, email.as_str());
            }
            return;
        }
        PositionalStrategy.assign(line, plain_segments, record);
    }

    fn name(&self) -> &'static str {
        "inline_run"
    }
}

/// Move the last name word into the title when the title starts lower-case
///
/// The name run is greedy, so "Jane Doe Head of Sales" first reads as
/// "Jane Doe Head" + "of Sales". Two-word names are never shortened.
fn split_inline_title(name: &str, title: &str) -> (String, String) {
    let starts_lower = title.chars().next().is_some_and(char::is_lowercase);
    match name.rsplit_once(char::is_whitespace) {
        Some((head, last)) if starts_lower && head.contains(char::is_whitespace) => {
            (head.to_string(), format!("{} {}", last, title))
        }
        _ => (name.to_string(), title.to_string()),
    }
}

/// Build the strategy selected by `kind`
pub fn build_strategy(kind: StrategyKind) -> Box<dyn SegmentStrategy> {
    match kind {
        StrategyKind::Positional => Box::new(PositionalStrategy),
        StrategyKind::TitleFirst => Box::new(TitleFirstStrategy),
        StrategyKind::InlineRun => Box::new(InlineRunStrategy),
    }
}

/// Plain segments of `line`, or `None` if the line has no delimiters
pub fn plain_segments<'a>(line: &'a str, phones: &PhonePatterns) -> Option<Vec<&'a str>> {
    let segments = split_segments(line);
    if segments.len() < 2 {
        return None;
    }
    Some(
        segments
            .into_iter()
            .filter(|s| is_plain_segment(s, phones))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_segments() {
        let line = "Jane Doe, Director, jane.doe@example.co.uk, (555) 123-4567";
        assert_eq!(
            split_segments(line),
            vec!["Jane Doe", "Director", "jane.doe@example.co.uk", "(555) 123-4567"]
        );
        assert_eq!(
            split_segments("Mary-Jane Watts – Editor | Mobile: 555-123-4567"),
            vec!["Mary-Jane Watts", "Editor", "Mobile: 555-123-4567"]
        );
        assert_eq!(split_segments("Jane Doe - CFO"), vec!["Jane Doe", "CFO"]);
        assert_eq!(split_segments(" , ,"), Vec::<&str>::new());
    }

    #[test]
    fn test_plain_segments() {
        let phones = PhonePatterns::default();
        assert!(is_plain_segment("Director", &phones));
        assert!(!is_plain_segment("Room 12", &phones));
        assert!(!is_plain_segment("jane@acme.com", &phones));
        assert!(!is_plain_segment("Office", &phones));

        let line = "Jane Doe, Director, jane@acme.com, Mobile: 555-111-2222";
        assert_eq!(plain_segments(line, &phones), Some(vec!["Jane Doe", "Director"]));
        assert_eq!(plain_segments("Jane Doe", &phones), None);
    }

    #[test]
    fn test_positional_assignment() {
        let mut record = CandidateRecord::new();
        PositionalStrategy.assign("", &["Jane Doe", "Director", "Finance"], &mut record);
        assert_eq!(record.get(ContactField::Name), Some("Jane Doe"));
        assert_eq!(record.get(ContactField::Title), Some("Director"));
    }

    #[test]
    fn test_positional_skips_filled_name() {
        let mut record = CandidateRecord::new();
        record.fill(ContactField::Name, "Jane Doe");
        PositionalStrategy.assign("", &["Head of Sales", "EMEA"], &mut record);
        assert_eq!(record.get(ContactField::Name), Some("Jane Doe"));
        assert_eq!(record.get(ContactField::Title), Some("Head of Sales"));
    }

    #[test]
    fn test_positional_misreads_title_first_input() {
        // accepted limitation: the strategy is positional, not semantic
        let mut record = CandidateRecord::new();
        PositionalStrategy.assign("", &["Director", "Jane Doe"], &mut record);
        assert_eq!(record.get(ContactField::Name), Some("Director"));
    }

    #[test]
    fn test_title_first_assignment() {
        let mut record = CandidateRecord::new();
        TitleFirstStrategy.assign("", &["Director", "Jane Doe"], &mut record);
        assert_eq!(record.get(ContactField::Title), Some("Director"));
        assert_eq!(record.get(ContactField::Name), Some("Jane Doe"));
    }

    #[test]
    fn test_inline_run() {
        let mut record = CandidateRecord::new();
        InlineRunStrategy.assign("Jane Doe Head of Sales jane@acme.com", &[], &mut record);
        assert_eq!(record.get(ContactField::Name), Some("Jane Doe"));
        assert_eq!(record.get(ContactField::Title), Some("Head of Sales"));
        assert_eq!(record.get(ContactField::Email), Some("jane@acme.com"));
    }

    #[test]
    fn test_inline_run_keeps_three_word_names() {
        let mut record = CandidateRecord::new();
        InlineRunStrategy.assign("John Allen Smith Editor john@acme.com", &[], &mut record);
        assert_eq!(record.get(ContactField::Name), Some("John Allen Smith"));
        assert_eq!(record.get(ContactField::Title), Some("Editor"));
    }

    #[test]
    fn test_inline_run_capitalized_title_word_joins_name() {
        // a capitalized one-word title after a two-word name is read as part of the name run
        let mut record = CandidateRecord::new();
        InlineRunStrategy.assign("Jane Doe Senior Editor jane@acme.com", &[], &mut record);
        assert_eq!(record.get(ContactField::Name), Some("Jane Doe Senior"));
        assert_eq!(record.get(ContactField::Title), Some("Editor"));
    }

    #[test]
    fn test_split_inline_title() {
        assert_eq!(
            split_inline_title("Jane Doe Head", "of Sales"),
            ("Jane Doe".to_string(), "Head of Sales".to_string())
        );
        assert_eq!(
            split_inline_title("Jane Doe", "of Sales"),
            ("Jane Doe".to_string(), "of Sales".to_string())
        );
        assert_eq!(
            split_inline_title("John Allen Smith", "Editor"),
            ("John Allen Smith".to_string(), "Editor".to_string())
        );
    }

    #[test]
    fn test_inline_run_falls_back_to_positional() {
        let mut record = CandidateRecord::new();
        InlineRunStrategy.assign("Jane Doe, Editor", &["Jane Doe", "Editor"], &mut record);
        assert_eq!(record.get(ContactField::Name), Some("Jane Doe"));
        assert_eq!(record.get(ContactField::Title), Some("Editor"));
    }

    #[test]
    fn test_build_strategy() {
        assert_eq!(build_strategy(StrategyKind::Positional).name(), "positional");
        assert_eq!(build_strategy(StrategyKind::TitleFirst).name(), "title_first");
        assert_eq!(build_strategy(StrategyKind::InlineRun).name(), "inline_run");
    }
}
