//! Profile command implementation.

use crate::cli::{KeywordArgs, PresetArg, ProfileAction, ProfileArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rollcall_extractor::ExtractorConfig;
use std::fs;
use std::path::PathBuf;

/// Execute the profile command.
pub fn execute_profile(args: ProfileArgs, config: &mut Config, formatter: &Formatter) -> Result<()> {
    match args.action {
        ProfileAction::List => list_profiles(config, formatter),
        ProfileAction::Show => show_active_profile(config, formatter),
        ProfileAction::Switch { name } => switch_profile(config, name, formatter),
        ProfileAction::Set {
            name,
            preset,
            extractor_config,
            keywords,
        } => set_profile(config, name, preset, extractor_config, keywords, formatter),
        ProfileAction::Delete { name } => delete_profile(config, name, formatter),
    }
}

/// List all profiles.
fn list_profiles(config: &Config, formatter: &Formatter) -> Result<()> {
    if config.profiles.is_empty() {
        println!("{}", formatter.info("No profiles configured"));
        return Ok(());
    }

    println!("Available profiles:");
    for name in config.profile_names() {
        let profile = &config.profiles[name];
        if name == config.active_profile {
            println!("* {}", formatter.success(name));
        } else {
            println!("  {}", name);
        }
        println!(
            "    Mode: {:?}, strategy: {:?}, columns: {:?}",
            profile.extractor.segment_mode,
            profile.extractor.segment_strategy,
            profile.extractor.columns
        );
    }

    Ok(())
}

/// Show the active profile.
fn show_active_profile(config: &Config, formatter: &Formatter) -> Result<()> {
    let profile = config.get_active_profile()?;

    println!("Active profile: {}", formatter.success(&config.active_profile));
    print_list("Include titles", &profile.include_titles);
    print_list("Exclude titles", &profile.exclude_titles);
    print_list("Drop keywords", &profile.drop_keywords);

    let extractor = profile.extractor.to_toml().map_err(CliError::Config)?;
    println!("  Extractor:");
    for line in extractor.lines() {
        println!("    {}", line);
    }

    Ok(())
}

fn print_list(label: &str, entries: &[String]) {
    if !entries.is_empty() {
        println!("  {}: {}", label, entries.join(", "));
    }
}

/// Switch to a different profile.
fn switch_profile(config: &mut Config, name: String, formatter: &Formatter) -> Result<()> {
    config.switch_profile(name.clone())?;
    config.save()?;
    println!(
        "{}",
        formatter.success(&format!("Switched to profile '{}'", name))
    );
    Ok(())
}

/// Create or update a profile.
///
/// Unspecified parts of an existing profile are kept.
fn set_profile(
    config: &mut Config,
    name: String,
    preset: Option<PresetArg>,
    extractor_config: Option<PathBuf>,
    keywords: KeywordArgs,
    formatter: &Formatter,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CliError::InvalidInput("Profile name must not be empty".to_string()));
    }

    let existing = config.profiles.get(&name).cloned();
    let action = if existing.is_some() { "Updated" } else { "Created" };
    let mut profile = existing.unwrap_or_default();

    if let Some(preset) = preset {
        profile.extractor = preset.into();
    }
    if let Some(path) = extractor_config {
        let contents = fs::read_to_string(&path)?;
        profile.extractor = ExtractorConfig::from_toml(&contents).map_err(CliError::Config)?;
    }
    profile.extractor.validate().map_err(CliError::Config)?;

    if !keywords.include.is_empty() {
        profile.include_titles = keywords.include;
    }
    if !keywords.exclude.is_empty() {
        profile.exclude_titles = keywords.exclude;
    }
    if !keywords.drop_keywords.is_empty() {
        profile.drop_keywords = keywords.drop_keywords;
    }

    config.set_profile(name.clone(), profile);
    config.save()?;

    println!(
        "{}",
        formatter.success(&format!("{} profile '{}'", action, name))
    );

    Ok(())
}

/// Delete a profile.
fn delete_profile(config: &mut Config, name: String, formatter: &Formatter) -> Result<()> {
    if name == config.active_profile {
        return Err(CliError::NotPermitted(
            "Cannot delete the active profile".to_string(),
        ));
    }

    if config.profiles.remove(&name).is_some() {
        config.save()?;
        println!(
            "{}",
            formatter.success(&format!("Deleted profile '{}'", name))
        );
    } else {
        println!(
            "{}",
            formatter.warning(&format!("Profile '{}' does not exist", name))
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use rollcall_extractor::{ColumnProfile, MatchMode, SegmentMode};
    use tempfile::TempDir;

    fn temp_config(dir: &TempDir) -> Config {
        Config::default().with_path(dir.path().join("config.toml"))
    }

    #[test]
    fn test_set_and_switch_profile() {
        let dir = TempDir::new().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        set_profile(
            &mut config,
            "team".to_string(),
            Some(PresetArg::Blocks),
            None,
            KeywordArgs {
                exclude: vec!["Manager".to_string()],
                ..KeywordArgs::default()
            },
            &formatter,
        )
        .unwrap();

        assert!(config.profiles.contains_key("team"));

        switch_profile(&mut config, "team".to_string(), &formatter).unwrap();
        assert_eq!(config.active_profile, "team");

        let reloaded = Config::load_from(dir.path().join("config.toml")).unwrap();
        let team = reloaded.get_active_profile().unwrap();
        assert_eq!(team.extractor.segment_mode, SegmentMode::BlockByBlank);
        assert_eq!(team.exclude_titles, vec!["Manager"]);
    }

    #[test]
    fn test_update_keeps_unspecified_parts() {
        let dir = TempDir::new().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        set_profile(
            &mut config,
            "roster".to_string(),
            None,
            None,
            KeywordArgs {
                drop_keywords: vec!["read more".to_string()],
                ..KeywordArgs::default()
            },
            &formatter,
        )
        .unwrap();

        let roster = &config.profiles["roster"];
        assert_eq!(roster.extractor.columns, ColumnProfile::Basic);
        assert_eq!(roster.drop_keywords, vec!["read more"]);
    }

    #[test]
    fn test_set_from_extractor_config_file() {
        let dir = TempDir::new().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        let toml_path = dir.path().join("extractor.toml");
        fs::write(&toml_path, "match_mode = \"fuzzy\"\nfuzzy_threshold = 0.9\n").unwrap();

        set_profile(
            &mut config,
            "fuzzy".to_string(),
            None,
            Some(toml_path),
            KeywordArgs::default(),
            &formatter,
        )
        .unwrap();

        let fuzzy = &config.profiles["fuzzy"];
        assert_eq!(fuzzy.extractor.match_mode, MatchMode::Fuzzy);
        assert_eq!(fuzzy.extractor.fuzzy_threshold, 0.9);
    }

    #[test]
    fn test_set_rejects_invalid_extractor_config() {
        let dir = TempDir::new().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        let toml_path = dir.path().join("extractor.toml");
        fs::write(&toml_path, "fuzzy_threshold = 3.0\n").unwrap();

        let result = set_profile(
            &mut config,
            "broken".to_string(),
            None,
            Some(toml_path),
            KeywordArgs::default(),
            &formatter,
        );
        assert!(matches!(result, Err(CliError::Config(_))));
        assert!(!config.profiles.contains_key("broken"));
    }

    #[test]
    fn test_delete_active_profile() {
        let dir = TempDir::new().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        let result = delete_profile(&mut config, "default".to_string(), &formatter);
        assert!(matches!(result, Err(CliError::NotPermitted(_))));

        delete_profile(&mut config, "blocks".to_string(), &formatter).unwrap();
        assert!(!config.profiles.contains_key("blocks"));
    }
}
