//! Keyword policy: built-in vocabularies plus user include/exclude lists

use once_cell::sync::Lazy;
use rollcall_domain::KeywordSet;
use tracing::debug;

/// Phrases whose presence always discards a line
pub const DEFAULT_REMOVE_KEYWORDS: &[&str] =
    &["view bio", "learn more", "contact info", "photo of", "Headshot"];

/// Built-in job-title vocabulary, used when no include list is given
pub const DEFAULT_JOB_TITLES: &[&str] = &[
    "President", "Vice President", "CEO", "COO", "CFO", "CMO", "CTO", "Chief", "Director",
    "Executive", "Managing Director", "Owner", "Partner", "Co-Founder", "Founder", "Principal",
    "Chairman", "Chairperson", "Manager", "Operations Manager", "Project Manager",
    "Product Manager", "General Manager", "Finance Manager", "HR Manager", "Office Manager",
    "Maintenance Manager", "Account Manager", "Marketing Manager", "Officer", "Controller",
    "Specialist", "Analyst", "Consultant", "Coordinator", "Assistant", "Advisor",
    "Representative", "Strategist", "Auditor", "Buyer", "Planner", "Supervisor", "Team Lead",
    "Lead", "Sr", "Senior", "Jr", "Junior", "Intern", "Apprentice", "Trainee", "Photographer",
    "Designer", "Editor", "Videographer", "Artist", "Content Creator", "Creative Director",
    "Developer", "Engineer", "Technician", "IT Support", "Support Engineer", "Programmer",
    "Web Developer", "Systems Administrator", "Architect", "Concierge", "Quality Assurance",
    "Accountant", "Property Manager", "Realtor",
];

static DEFAULT_REMOVE_SET: Lazy<KeywordSet> =
    Lazy::new(|| KeywordSet::from_entries(DEFAULT_REMOVE_KEYWORDS));

static DEFAULT_JOB_SET: Lazy<KeywordSet> =
    Lazy::new(|| KeywordSet::from_entries(DEFAULT_JOB_TITLES));

/// The built-in drop keywords, lower-cased
pub fn default_remove_keywords() -> &'static KeywordSet {
    &DEFAULT_REMOVE_SET
}

/// The built-in job titles, lower-cased
pub fn default_job_titles() -> &'static KeywordSet {
    &DEFAULT_JOB_SET
}

/// User-supplied keyword lists for one run
#[derive(Debug, Clone, Default)]
pub struct KeywordPolicy {
    /// Replaces the built-in job titles when non-empty
    pub include_titles: Option<KeywordSet>,
    /// Subtracted (exact match) from the job keywords
    pub exclude_titles: KeywordSet,
    /// Merged into the drop keywords
    pub extra_drop_keywords: KeywordSet,
}

/// Final vocabularies produced by a [`KeywordPolicy`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKeywords {
    /// Job-title vocabulary (line dropping and, by default, title detection)
    pub job_keywords: KeywordSet,
    /// Absolute drop-line vocabulary
    pub removal_keywords: KeywordSet,
}

impl KeywordPolicy {
    /// Replace the built-in job titles with `titles`
    pub fn with_include<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.include_titles = Some(KeywordSet::from_entries(titles));
        self
    }

    /// Subtract `titles` from the job keywords
    pub fn with_exclude<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude_titles.extend(titles);
        self
    }

    /// Add extra drop keywords
    pub fn with_extra_drop<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_drop_keywords.extend(keywords);
        self
    }

    /// Resolve against the built-in defaults
    ///
    /// An include list replaces the default job titles entirely; one that is
    /// empty after blank entries are dropped counts as not supplied.
    pub fn resolve(&self) -> ResolvedKeywords {
        let base = match &self.include_titles {
            Some(include) if !include.is_empty() => include,
            _ => default_job_titles(),
        };
        let job_keywords = base.subtract(&self.exclude_titles);
        let removal_keywords = default_remove_keywords().union(&self.extra_drop_keywords);

        debug!(
            "Resolved {} job keywords, {} drop keywords",
            job_keywords.len(),
            removal_keywords.len()
        );

        ResolvedKeywords {
            job_keywords,
            removal_keywords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_lowercased() {
        assert!(default_job_titles().contains("vice president"));
        assert_eq!(default_job_titles().len(), DEFAULT_JOB_TITLES.len());
        assert!(default_remove_keywords().iter().any(|k| k == "headshot"));
    }

    #[test]
    fn test_default_resolution() {
        let resolved = KeywordPolicy::default().resolve();
        assert_eq!(resolved.job_keywords, *default_job_titles());
        assert_eq!(resolved.removal_keywords, *default_remove_keywords());
    }

    #[test]
    fn test_include_replaces_defaults() {
        let policy = KeywordPolicy::default().with_include(["CEO", "Director"]);
        let resolved = policy.resolve();
        assert_eq!(resolved.job_keywords.len(), 2);
        assert!(!resolved.job_keywords.contains("manager"));
    }

    #[test]
    fn test_blank_include_falls_back_to_defaults() {
        let policy = KeywordPolicy::default().with_include(["", "  "]);
        assert_eq!(policy.resolve().job_keywords, *default_job_titles());
    }

    #[test]
    fn test_exclusions_are_exact() {
        let policy = KeywordPolicy::default().with_exclude(["Manager"]);
        let resolved = policy.resolve();
        assert!(!resolved.job_keywords.contains("manager"));
        assert!(resolved.job_keywords.contains("office manager"));
    }

    #[test]
    fn test_exclusion_applies_to_include_list() {
        let policy = KeywordPolicy::default()
            .with_include(["CEO", "Intern"])
            .with_exclude(["intern"]);
        let resolved = policy.resolve();
        assert_eq!(resolved.job_keywords.as_slice(), &["ceo".to_string()]);
    }

    #[test]
    fn test_extra_drop_keywords_are_merged() {
        let policy = KeywordPolicy::default().with_extra_drop(["Learn More", "Read Profile", ""]);
        let resolved = policy.resolve();
        assert_eq!(resolved.removal_keywords.len(), DEFAULT_REMOVE_KEYWORDS.len() + 1);
        assert!(resolved.removal_keywords.contains("read profile"));
    }
}
