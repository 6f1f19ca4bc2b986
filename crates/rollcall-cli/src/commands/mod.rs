//! Command implementations.

pub mod clean;
pub mod extract;
pub mod profile;

pub use self::clean::execute_clean;
pub use self::extract::execute_extract;
pub use self::profile::execute_profile;

use crate::cli::{InputArgs, KeywordArgs};
use crate::config::Profile;
use crate::error::Result;
use rollcall_extractor::ExtractionRequest;
use std::fs;
use std::io::{self, Read};
use tracing::debug;

/// Read the pasted text from a file, or stdin when no file (or `-`) is given.
pub fn read_input(input: &InputArgs) -> Result<String> {
    match &input.file {
        Some(path) if path.as_os_str() != "-" => {
            debug!("Reading input from {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
        _ => {
            debug!("Reading input from stdin");
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Build a request from the profile's keyword lists, with command-line lists taking precedence.
pub fn build_request(raw_text: String, keywords: &KeywordArgs, profile: &Profile) -> ExtractionRequest {
    let mut request = profile.request(raw_text);
    if !keywords.include.is_empty() {
        request = request.with_include_titles(keywords.include.clone());
    }
    if !keywords.exclude.is_empty() {
        request = request.with_exclude_titles(keywords.exclude.clone());
    }
    if !keywords.drop_keywords.is_empty() {
        request = request.with_extra_drop_keywords(keywords.drop_keywords.clone());
    }
    request
}
