//! Configuration for the Extractor

use rollcall_domain::PhoneCategory;
use serde::{Deserialize, Serialize};

/// Similarity a word must reach against a job keyword in fuzzy mode
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.85;

/// How cleaned text is split into candidate records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentMode {
    /// Walk lines; a capitalized multi-word line starts a new record
    #[default]
    LineByLine,
    /// Blank-line separated blocks; one record per block
    BlockByBlank,
    /// Every line is classified on its own into its own record
    RecordPerLine,
}

/// How job keywords are matched against lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Case-insensitive substring match
    #[default]
    Exact,
    /// Word-level edit-similarity match
    Fuzzy,
}

/// Which segment strategy assigns plain segments of a delimited line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// First plain segment is the name, the next the title
    #[default]
    Positional,
    /// First plain segment is the title, the next the name
    TitleFirst,
    /// `Name Title email` on one line without delimiters
    InlineRun,
}

/// Column set of the comma-separated payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnProfile {
    /// Name, Title, Email, Mobile, Direct, Office
    #[default]
    Full,
    /// Name, Title, Email, Phone (first of Mobile, Direct, Office)
    CombinedPhone,
    /// Name, Title, Email
    Basic,
}

/// Keywords that anchor one phone category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneRuleConfig {
    /// Category label: `mobile`, `direct` or `office`
    pub category: String,

    /// Case-insensitive keywords that must precede the number
    pub keywords: Vec<String>,
}

impl PhoneRuleConfig {
    /// Build a rule from a category and keywords
    pub fn new(category: PhoneCategory, keywords: &[&str]) -> Self {
        Self {
            category: category.as_str().to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// The built-in rules, in evaluation order
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(PhoneCategory::Mobile, &["mobile", "cell"]),
            Self::new(PhoneCategory::Direct, &["direct"]),
            Self::new(
                PhoneCategory::Office,
                &["telephone", "tel", "office", "work", "phone"],
            ),
        ]
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Record segmentation mode
    pub segment_mode: SegmentMode,

    /// Job keyword matching mode for line dropping
    pub match_mode: MatchMode,

    /// Acceptance threshold for fuzzy matching (0.0-1.0)
    pub fuzzy_threshold: f64,

    /// Drop lines that contain a job keyword
    pub drop_title_lines: bool,

    /// Populate the Title field from the title vocabulary
    pub detect_titles: bool,

    /// Independent title-detection vocabulary; the resolved job keywords when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_vocabulary: Option<Vec<String>>,

    /// Assignment strategy for delimited lines
    pub segment_strategy: StrategyKind,

    /// Column profile of the CSV payload
    pub columns: ColumnProfile,

    /// Phone rules, evaluated in order
    pub phone_rules: Vec<PhoneRuleConfig>,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(format!(
                "fuzzy_threshold {} out of range [0.0, 1.0]",
                self.fuzzy_threshold
            ));
        }
        if self.phone_rules.is_empty() {
            return Err("phone_rules must contain at least one rule".to_string());
        }
        let mut seen = Vec::new();
        for rule in &self.phone_rules {
            let category = PhoneCategory::parse(&rule.category)
                .ok_or_else(|| format!("unknown phone category '{}'", rule.category))?;
            if seen.contains(&category) {
                return Err(format!("phone category '{}' listed twice", rule.category));
            }
            seen.push(category);
            if rule.keywords.iter().all(|k| k.trim().is_empty()) {
                return Err(format!(
                    "phone category '{}' has no keywords",
                    rule.category
                ));
            }
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// Line-by-line segmentation, exact matching, title lines dropped
    fn default() -> Self {
        Self {
            segment_mode: SegmentMode::LineByLine,
            match_mode: MatchMode::Exact,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            drop_title_lines: true,
            detect_titles: true,
            title_vocabulary: None,
            segment_strategy: StrategyKind::Positional,
            columns: ColumnProfile::Full,
            phone_rules: PhoneRuleConfig::defaults(),
        }
    }
}

impl ExtractorConfig {
    /// Roster preset: one `Name Title email` contact per line
    pub fn roster() -> Self {
        Self {
            segment_mode: SegmentMode::RecordPerLine,
            drop_title_lines: false,
            segment_strategy: StrategyKind::InlineRun,
            columns: ColumnProfile::Basic,
            ..Self::default()
        }
    }

    /// Blocks preset: one contact per blank-line separated block
    pub fn blocks() -> Self {
        Self {
            segment_mode: SegmentMode::BlockByBlank,
            drop_title_lines: false,
            columns: ColumnProfile::CombinedPhone,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
