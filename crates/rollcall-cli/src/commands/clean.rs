//! Clean command implementation.

use super::{build_request, read_input};
use crate::cli::{fuzzy_override, CleanArgs};
use crate::config::{Config, OutputFormat, Profile};
use crate::error::Result;
use crate::output::Formatter;
use rollcall_extractor::{CleanedLines, Extractor};

/// Execute the clean command.
pub fn execute_clean(args: CleanArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let profile = config.get_active_profile()?;
    let raw_text = read_input(&args.input)?;
    let cleaned = clean_text(raw_text, &args, profile)?;

    println!("{}", formatter.format_lines(&cleaned)?);
    if formatter.format() != OutputFormat::Quiet {
        eprintln!("{}", formatter.info(&cleaned.summary()));
    }
    Ok(())
}

/// Clean `raw_text` under the profile, with command-line overrides applied.
pub fn clean_text(raw_text: String, args: &CleanArgs, profile: &Profile) -> Result<CleanedLines> {
    let mut extractor_config = profile.extractor.clone();
    if args.keep_titles {
        extractor_config.drop_title_lines = false;
    }
    let extractor = Extractor::new(extractor_config)?;

    let mut request = build_request(raw_text, &args.keywords, profile);
    if let Some(fuzzy) = fuzzy_override(args.fuzzy, args.exact) {
        request = request.with_fuzzy_job_match(fuzzy);
    }
    Ok(extractor.clean_lines(&request))
}
