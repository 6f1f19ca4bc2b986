//! Rollcall Domain Layer
//!
//! This crate contains the domain model for Rollcall, the staff-directory
//! contact extractor. It has ZERO external dependencies and defines the value
//! objects and trait interfaces that the extractor and CLI depend upon.
//!
//! ## Key Concepts
//!
//! - **Contact field**: one of Name, Title, Email, Mobile, Direct, Office
//! - **Keyword set**: an ordered, lower-cased vocabulary (drop keywords, job titles)
//! - **Candidate record**: an in-progress accumulation of fields during segmentation
//! - **Contact record**: the sealed, immutable result of a candidate record
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and rules only
//! - Matching and classification strategies are trait seams implemented elsewhere

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contact;
pub mod field;
pub mod keywords;
pub mod traits;

// Re-exports for convenience
pub use contact::{CandidateRecord, ContactRecord};
pub use field::{ContactField, PhoneCategory};
pub use keywords::KeywordSet;
pub use traits::{KeywordMatcher, SegmentStrategy};
