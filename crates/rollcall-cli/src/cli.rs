//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use rollcall_extractor::{ColumnProfile, ExtractorConfig, SegmentMode, StrategyKind};
use std::path::PathBuf;

/// Rollcall - Clean pasted staff-directory text and extract contacts.
#[derive(Debug, Parser)]
#[command(name = "rollcall")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "ROLLCALL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Profile to use
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Comma-separated values
    Csv,
    /// Quiet format (names or lines only)
    Quiet,
    /// One `Name | Title | Email | …` line per contact
    Display,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Deduplicate and filter lines without extracting contacts
    Clean(CleanArgs),

    /// Clean the text and extract a contact table
    Extract(ExtractArgs),

    /// Manage configuration profiles
    Profile(ProfileArgs),
}

/// Where the pasted text comes from.
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Text file to read; stdin when omitted or `-`
    pub file: Option<PathBuf>,
}

/// Keyword list overrides, comma separated.
#[derive(Debug, Clone, Default, Args)]
pub struct KeywordArgs {
    /// Job titles replacing the built-in list
    #[arg(long, value_delimiter = ',')]
    pub include: Vec<String>,

    /// Job titles removed from the list (exact match)
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Extra keywords whose lines are always dropped
    #[arg(long = "drop", value_delimiter = ',')]
    pub drop_keywords: Vec<String>,
}

/// Arguments for the clean command.
#[derive(Debug, Parser)]
pub struct CleanArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub keywords: KeywordArgs,

    /// Match job titles approximately
    #[arg(long, conflicts_with = "exact")]
    pub fuzzy: bool,

    /// Match job titles as exact substrings
    #[arg(long)]
    pub exact: bool,

    /// Keep lines that mention a job title
    #[arg(long)]
    pub keep_titles: bool,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub keywords: KeywordArgs,

    /// Segmentation mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Strategy for delimited lines
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Column set of the CSV payload
    #[arg(long, value_enum)]
    pub columns: Option<ColumnsArg>,

    /// Match job titles approximately
    #[arg(long, conflicts_with = "exact")]
    pub fuzzy: bool,

    /// Match job titles as exact substrings
    #[arg(long)]
    pub exact: bool,

    /// Keep lines that mention a job title
    #[arg(long)]
    pub keep_titles: bool,

    /// Write the contact CSV payload to this file
    #[arg(long)]
    pub csv_out: Option<PathBuf>,

    /// Write the cleaned lines to this file
    #[arg(long)]
    pub txt_out: Option<PathBuf>,
}

/// Arguments for profile management.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

/// Profile management actions.
#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// List all profiles
    List,

    /// Show active profile
    Show,

    /// Switch to a different profile
    Switch {
        /// Profile name
        name: String,
    },

    /// Create or update a profile
    Set {
        /// Profile name
        name: String,

        /// Start from a built-in extractor preset
        #[arg(long, value_enum)]
        preset: Option<PresetArg>,

        /// TOML file holding the extractor configuration
        #[arg(long, conflicts_with = "preset")]
        extractor_config: Option<PathBuf>,

        #[command(flatten)]
        keywords: KeywordArgs,
    },

    /// Delete a profile
    Delete {
        /// Profile name
        name: String,
    },
}

/// Segmentation mode argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ModeArg {
    /// A capitalized name line starts each record
    LineByLine,
    /// One record per blank-line separated block
    BlockByBlank,
    /// One record per line
    RecordPerLine,
}

/// Segment strategy argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StrategyArg {
    /// Name first, then title
    Positional,
    /// Title first, then name
    TitleFirst,
    /// `Name Title email` without delimiters
    InlineRun,
}

/// Column profile argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ColumnsArg {
    /// Name, Title, Email, Mobile, Direct, Office
    Full,
    /// Name, Title, Email, Phone
    CombinedPhone,
    /// Name, Title, Email
    Basic,
}

/// Built-in extractor presets.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PresetArg {
    /// Line-by-line records, title lines dropped
    Default,
    /// One `Name Title email` contact per line
    Roster,
    /// One contact per blank-line separated block
    Blocks,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Csv => crate::config::OutputFormat::Csv,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
            CliFormat::Display => crate::config::OutputFormat::Display,
        }
    }
}

impl From<ModeArg> for SegmentMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::LineByLine => SegmentMode::LineByLine,
            ModeArg::BlockByBlank => SegmentMode::BlockByBlank,
            ModeArg::RecordPerLine => SegmentMode::RecordPerLine,
        }
    }
}

impl From<StrategyArg> for StrategyKind {
    fn from(strategy: StrategyArg) -> Self {
        match strategy {
            StrategyArg::Positional => StrategyKind::Positional,
            StrategyArg::TitleFirst => StrategyKind::TitleFirst,
            StrategyArg::InlineRun => StrategyKind::InlineRun,
        }
    }
}

impl From<ColumnsArg> for ColumnProfile {
    fn from(columns: ColumnsArg) -> Self {
        match columns {
            ColumnsArg::Full => ColumnProfile::Full,
            ColumnsArg::CombinedPhone => ColumnProfile::CombinedPhone,
            ColumnsArg::Basic => ColumnProfile::Basic,
        }
    }
}

impl From<PresetArg> for ExtractorConfig {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Default => ExtractorConfig::default(),
            PresetArg::Roster => ExtractorConfig::roster(),
            PresetArg::Blocks => ExtractorConfig::blocks(),
        }
    }
}

/// Resolve `--fuzzy` / `--exact` into an override, if either was given.
pub fn fuzzy_override(fuzzy: bool, exact: bool) -> Option<bool> {
    match (fuzzy, exact) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_command() {
        let cli = Cli::parse_from([
            "rollcall",
            "extract",
            "team.txt",
            "--mode",
            "block-by-blank",
            "--exclude",
            "Manager,Lead",
            "--csv-out",
            "contacts.csv",
        ]);
        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.input.file, Some(PathBuf::from("team.txt")));
                assert!(matches!(args.mode, Some(ModeArg::BlockByBlank)));
                assert_eq!(args.keywords.exclude, vec!["Manager", "Lead"]);
                assert_eq!(args.csv_out, Some(PathBuf::from("contacts.csv")));
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_clean_reads_stdin_by_default() {
        let cli = Cli::parse_from(["rollcall", "clean", "--fuzzy"]);
        match cli.command {
            Command::Clean(args) => {
                assert!(args.input.file.is_none());
                assert_eq!(fuzzy_override(args.fuzzy, args.exact), Some(true));
            }
            _ => panic!("Expected Clean command"),
        }
    }

    #[test]
    fn test_fuzzy_conflicts_with_exact() {
        let result = Cli::try_parse_from(["rollcall", "clean", "--fuzzy", "--exact"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["rollcall", "profile", "list", "-vv", "--format", "json"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
    }

    #[test]
    fn test_profile_set_command() {
        let cli = Cli::parse_from([
            "rollcall", "profile", "set", "team", "--preset", "roster", "--drop", "Read more",
        ]);
        match cli.command {
            Command::Profile(ProfileArgs {
                action: ProfileAction::Set { name, preset, keywords, .. },
            }) => {
                assert_eq!(name, "team");
                assert!(matches!(preset, Some(PresetArg::Roster)));
                assert_eq!(keywords.drop_keywords, vec!["Read more"]);
            }
            _ => panic!("Expected Profile Set command"),
        }
    }

    #[test]
    fn test_conversions() {
        assert_eq!(SegmentMode::from(ModeArg::RecordPerLine), SegmentMode::RecordPerLine);
        assert_eq!(StrategyKind::from(StrategyArg::TitleFirst), StrategyKind::TitleFirst);
        assert_eq!(ColumnProfile::from(ColumnsArg::Basic), ColumnProfile::Basic);
        assert_eq!(
            ExtractorConfig::from(PresetArg::Blocks).segment_mode,
            SegmentMode::BlockByBlank
        );
        assert_eq!(fuzzy_override(false, false), None);
        assert_eq!(fuzzy_override(false, true), Some(false));
    }
}
