//! Error types for the Extractor

use rollcall_domain::PhoneCategory;
use thiserror::Error;

/// Errors that can occur while building an extractor
///
/// Extraction itself never fails; only configuration can.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A phone-category rule did not compile
    #[error("Invalid {category:?} phone pattern: {source}")]
    Pattern {
        /// Category whose rule failed
        category: PhoneCategory,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },
}
