//! Extract command implementation.

use super::{build_request, read_input};
use crate::cli::{fuzzy_override, ExtractArgs};
use crate::config::{Config, OutputFormat, Profile};
use crate::error::Result;
use crate::output::Formatter;
use rollcall_extractor::{ExtractionOutcome, ExtractionResult, Extractor};
use std::fs;
use tracing::info;

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let profile = config.get_active_profile()?;
    let raw_text = read_input(&args.input)?;
    let (extractor, result) = extract_text(raw_text, &args, profile)?;

    println!("{}", formatter.format_contacts(&result, extractor.formatter())?);

    if formatter.format() != OutputFormat::Quiet {
        eprintln!("{}", formatter.info(&result.summary()));
        if result.outcome() == ExtractionOutcome::NothingExtracted {
            eprintln!("{}", formatter.warning("No contacts extracted"));
        }
    }

    for written in write_artifacts(&args, &extractor, &result)? {
        eprintln!("{}", formatter.success(&written));
    }
    Ok(())
}

/// Run the extractor over `raw_text` under the profile, with command-line overrides applied.
pub fn extract_text(
    raw_text: String,
    args: &ExtractArgs,
    profile: &Profile,
) -> Result<(Extractor, ExtractionResult)> {
    let mut extractor_config = profile.extractor.clone();
    if let Some(strategy) = args.strategy {
        extractor_config.segment_strategy = strategy.into();
    }
    if let Some(columns) = args.columns {
        extractor_config.columns = columns.into();
    }
    if args.keep_titles {
        extractor_config.drop_title_lines = false;
    }
    let extractor = Extractor::new(extractor_config)?;

    let mut request = build_request(raw_text, &args.keywords, profile);
    if let Some(mode) = args.mode {
        request = request.with_mode(mode.into());
    }
    if let Some(fuzzy) = fuzzy_override(args.fuzzy, args.exact) {
        request = request.with_fuzzy_job_match(fuzzy);
    }

    let result = extractor.extract(&request);
    Ok((extractor, result))
}

/// Write the CSV and TXT payloads requested by `--csv-out` / `--txt-out`.
///
/// Returns one message per file written.
pub fn write_artifacts(
    args: &ExtractArgs,
    extractor: &Extractor,
    result: &ExtractionResult,
) -> Result<Vec<String>> {
    let mut written = Vec::new();

    if let Some(path) = &args.csv_out {
        fs::write(path, extractor.formatter().to_csv(&result.contacts))?;
        info!("Wrote {} contacts to {}", result.contacts.len(), path.display());
        written.push(format!(
            "Wrote {} contact(s) to {}",
            result.contacts.len(),
            path.display()
        ));
    }
    if let Some(path) = &args.txt_out {
        fs::write(path, result.text_payload())?;
        info!("Wrote {} lines to {}", result.cleaned_lines.len(), path.display());
        written.push(format!(
            "Wrote {} line(s) to {}",
            result.cleaned_lines.len(),
            path.display()
        ));
    }

    Ok(written)
}
