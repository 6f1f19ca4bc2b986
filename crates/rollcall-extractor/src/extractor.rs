//! Core Extractor implementation

use crate::classify::FieldClassifier;
use crate::config::{ExtractorConfig, MatchMode, SegmentMode};
use crate::dedup::{CleanedLines, LineCleaner};
use crate::error::ExtractorError;
use crate::format::ContactFormatter;
use crate::keywords::{KeywordPolicy, ResolvedKeywords};
use crate::matcher::build_matcher;
use crate::patterns::PhonePatterns;
use crate::segment::RecordSegmenter;
use crate::strategy::build_strategy;
use crate::types::{ExtractionRequest, ExtractionResult};
use rollcall_domain::KeywordSet;
use tracing::{debug, info, warn};

/// The Extractor turns pasted directory text into cleaned lines and contacts
///
/// Built once from a validated configuration; each call to
/// [`extract`](Self::extract) is independent and shares only the compiled
/// phone rules and the built-in vocabularies.
#[derive(Debug)]
pub struct Extractor {
    config: ExtractorConfig,
    phones: PhonePatterns,
    formatter: ContactFormatter,
}

impl Extractor {
    /// Create a new Extractor, failing fast on invalid configuration
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        let phones = PhonePatterns::compile(&config.phone_rules)?;
        let formatter = ContactFormatter::new(config.columns);

        debug!(
            "Extractor ready: {:?} segmentation, {:?} matching, {} phone rules",
            config.segment_mode,
            config.match_mode,
            config.phone_rules.len()
        );

        Ok(Self {
            config,
            phones,
            formatter,
        })
    }

    /// Create an Extractor with the default configuration
    pub fn with_defaults() -> Result<Self, ExtractorError> {
        Self::new(ExtractorConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Formatter for the configured column profile
    pub fn formatter(&self) -> &ContactFormatter {
        &self.formatter
    }

    /// Clean the text without extracting contacts
    pub fn clean_lines(&self, request: &ExtractionRequest) -> CleanedLines {
        let (_, resolved) = Self::resolve_keywords(request);
        self.cleaner(request, &resolved).clean(&request.raw_text)
    }

    /// Clean the text and extract contacts
    pub fn extract(&self, request: &ExtractionRequest) -> ExtractionResult {
        let mode = request.mode.unwrap_or(self.config.segment_mode);
        info!(
            "Starting extraction: {} bytes, {:?} segmentation",
            request.raw_text.len(),
            mode
        );

        let (policy, resolved) = Self::resolve_keywords(request);
        let cleaner = self.cleaner(request, &resolved);
        let cleaned = cleaner.clean(&request.raw_text);

        let classifier = FieldClassifier::new(
            &self.phones,
            self.title_vocabulary(&policy, &resolved),
            build_strategy(self.config.segment_strategy),
        );
        debug!("Using {} segment strategy", classifier.strategy_name());
        let segmenter = RecordSegmenter::new(classifier);

        let contacts = match mode {
            SegmentMode::LineByLine => segmenter.segment_lines(&cleaned.lines),
            SegmentMode::RecordPerLine => segmenter.segment_per_line(&cleaned.lines),
            SegmentMode::BlockByBlank => {
                segmenter.segment_blocks(&cleaner.clean_blocks(&request.raw_text))
            }
        };

        let result = ExtractionResult {
            input_line_count: cleaned.input_count,
            removed_count: cleaned.removed_count(),
            cleaned_lines: cleaned.lines,
            contacts,
        };

        info!(
            "Extraction complete: {}, {} contacts",
            result.summary(),
            result.contacts.len()
        );
        result
    }

    fn resolve_keywords(request: &ExtractionRequest) -> (KeywordPolicy, ResolvedKeywords) {
        let mut policy = KeywordPolicy::default();
        if let Some(include) = &request.include_titles {
            policy = policy.with_include(include);
        }
        if let Some(exclude) = &request.exclude_titles {
            policy = policy.with_exclude(exclude);
        }
        if let Some(extra) = &request.extra_drop_keywords {
            policy = policy.with_extra_drop(extra);
        }
        let resolved = policy.resolve();
        (policy, resolved)
    }

    fn match_mode(&self, request: &ExtractionRequest) -> MatchMode {
        match request.fuzzy_job_match {
            Some(true) => MatchMode::Fuzzy,
            Some(false) => MatchMode::Exact,
            None => self.config.match_mode,
        }
    }

    fn cleaner(&self, request: &ExtractionRequest, resolved: &ResolvedKeywords) -> LineCleaner {
        let match_mode = self.match_mode(request);
        let job_matcher = if self.config.drop_title_lines {
            Some(build_matcher(
                match_mode,
                resolved.job_keywords.clone(),
                self.config.fuzzy_threshold,
            ))
        } else {
            if match_mode == MatchMode::Fuzzy {
                warn!("Fuzzy job matching has no effect while title lines are kept");
            }
            None
        };
        LineCleaner::new(job_matcher, resolved.removal_keywords.clone())
    }

    fn title_vocabulary(&self, policy: &KeywordPolicy, resolved: &ResolvedKeywords) -> KeywordSet {
        if !self.config.detect_titles {
            return KeywordSet::new();
        }
        match &self.config.title_vocabulary {
            Some(entries) => KeywordSet::from_entries(entries).subtract(&policy.exclude_titles),
            None => resolved.job_keywords.clone(),
        }
    }
}
