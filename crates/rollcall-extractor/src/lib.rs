//! Rollcall Extractor
//!
//! Cleans pasted staff-directory text and extracts a contact table from it.
//!
//! # Overview
//!
//! Team pages copied out of a browser arrive as a jumble of names, job titles,
//! emails, phone numbers and link text ("View Bio", "Learn more"). The
//! Extractor produces two things from such a paste: the deduplicated,
//! filtered line list, and a best-effort table of contacts with Name, Title,
//! Email, Mobile, Direct and Office fields.
//!
//! # Architecture
//!
//! ```text
//! Text → Keyword Policy → Line Cleaner → Record Segmenter → Field Classifier → Formatter
//! ```
//!
//! # Key Features
//!
//! - **Keyword policy**: built-in job titles and drop keywords, user include/exclude lists
//! - **Exact or fuzzy** job keyword matching behind one [`KeywordMatcher`] contract
//! - **Three segmentation modes**: line state machine, blank-line blocks, one record per line
//! - **Phone rules as data**: category → keywords, compiled once per extractor
//! - **Pluggable segment strategies** for delimited lines
//!
//! # Example Usage
//!
//! ```
//! use rollcall_extractor::{Extractor, ExtractorConfig, ExtractionRequest};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = Extractor::new(ExtractorConfig::default())?;
//!
//! let request = ExtractionRequest::new("Jane Doe\njane@acme.com\nMobile: 555-111-2222\nView Bio");
//! let result = extractor.extract(&request);
//!
//! println!("{}", result.summary());
//! print!("{}", extractor.formatter().to_csv(&result.contacts));
//! # Ok(())
//! # }
//! ```
//!
//! [`KeywordMatcher`]: rollcall_domain::KeywordMatcher

#![warn(missing_docs)]

mod classify;
mod config;
mod dedup;
mod error;
mod extractor;
mod format;
mod keywords;
mod matcher;
mod patterns;
mod segment;
mod strategy;
mod types;


pub use classify::FieldClassifier;
pub use config::{
    ColumnProfile, ExtractorConfig, MatchMode, PhoneRuleConfig, SegmentMode, StrategyKind,
    DEFAULT_FUZZY_THRESHOLD,
};
pub use dedup::{CleanedLines, LineCleaner};
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use format::{Column, ContactFormatter, DISPLAY_DELIMITER};
pub use keywords::{
    default_job_titles, default_remove_keywords, KeywordPolicy, ResolvedKeywords,
    DEFAULT_JOB_TITLES, DEFAULT_REMOVE_KEYWORDS,
};
pub use matcher::{build_matcher, ExactMatcher, FuzzyMatcher};
pub use patterns::{normalize_phone, PhonePatterns};
pub use segment::RecordSegmenter;
pub use strategy::{build_strategy, InlineRunStrategy, PositionalStrategy, TitleFirstStrategy};
pub use types::{ExtractionOutcome, ExtractionRequest, ExtractionResult};
