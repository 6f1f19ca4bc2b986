//! Regular expressions for emails, names and keyword-anchored phone numbers

use crate::config::PhoneRuleConfig;
use crate::error::ExtractorError;
use once_cell::sync::Lazy;
use regex::Regex;
use rollcall_domain::PhoneCategory;

// Compiled once, reused by every run.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}\b").expect("email pattern")
});
static NAME_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{Lu}\p{Ll}+(?: \p{Lu}\p{Ll}+)+$").expect("name line pattern"));
static NAME_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\p{Lu}\p{Ll}+(?: \p{Lu}\p{Ll}+)+\b").expect("name run pattern"));

/// First email address in `text`
pub fn find_email(text: &str) -> Option<&str> {
    EMAIL_RE.find(text).map(|m| m.as_str())
}

/// Whether the whole of `text` is a capitalized multi-word name
///
/// `"John Allen Smith"` matches; `"john doe"`, `"Jane"` and `"Jane Doe 2"` do not.
pub fn is_name_line(text: &str) -> bool {
    NAME_LINE_RE.is_match(text.trim())
}

/// First capitalized multi-word run anywhere in `text`
pub fn find_name_run(text: &str) -> Option<&str> {
    NAME_RUN_RE.find(text).map(|m| m.as_str())
}

/// Keep digits, plus a `+` if the number starts with one
pub fn normalize_phone(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut normalized = String::with_capacity(trimmed.len());
    if trimmed.starts_with('+') {
        normalized.push('+');
    }
    normalized.extend(trimmed.chars().filter(|c| c.is_ascii_digit()));
    normalized
}

/// Keyword-anchored phone recognition rules, one per category
///
/// Categories are tried in rule order; the first rule that matches a line
/// claims it and later categories are skipped for that line.
#[derive(Debug, Clone)]
pub struct PhonePatterns {
    rules: Vec<(PhoneCategory, Regex)>,
    any_keyword: Regex,
}

impl PhonePatterns {
    /// Compile rules from configuration
    pub fn compile(configs: &[PhoneRuleConfig]) -> Result<Self, ExtractorError> {
        let mut rules = Vec::with_capacity(configs.len());
        let mut all_keywords = Vec::new();

        for config in configs {
            let category = PhoneCategory::parse(&config.category).ok_or_else(|| {
                ExtractorError::Config(format!("unknown phone category '{}'", config.category))
            })?;
            let keywords = keyword_alternation(&config.keywords);
            if keywords.is_empty() {
                return Err(ExtractorError::Config(format!(
                    "phone category '{}' has no keywords",
                    config.category
                )));
            }
            // keyword, optional connector word, optional separator, then a
            // run of at least 7 digits / + / parens / spaces / hyphens
            let pattern = format!(
                r"(?i)\b(?:{keywords})\b(?:\s+(?:phone|line|number|no\.?|#))?\s*[:.\-–—]?\s*(\+?\(?\d[\d()\s\-]{{5,}}\d)"
            );
            let regex = Regex::new(&pattern)
                .map_err(|source| ExtractorError::Pattern { category, source })?;
            rules.push((category, regex));
            all_keywords.push(keywords);
        }

        let any_keyword = Regex::new(&format!(r"(?i)\b(?:{})\b", all_keywords.join("|")))
            .map_err(|e| ExtractorError::Config(format!("phone keyword pattern: {}", e)))?;

        Ok(Self { rules, any_keyword })
    }

    /// First category (in rule order) whose rule matches `line`, with the
    /// normalized number
    pub fn find(&self, line: &str) -> Option<(PhoneCategory, String)> {
        self.rules.iter().find_map(|(category, regex)| {
            regex
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| (*category, normalize_phone(m.as_str())))
        })
    }

    /// Whether `text` mentions any phone category keyword
    pub fn mentions_keyword(&self, text: &str) -> bool {
        self.any_keyword.is_match(text)
    }

    /// Categories in evaluation order
    pub fn categories(&self) -> impl Iterator<Item = PhoneCategory> + '_ {
        self.rules.iter().map(|(c, _)| *c)
    }
}

impl Default for PhonePatterns {
    /// The built-in rules; panics only if they are broken
    fn default() -> Self {
        Self::compile(&PhoneRuleConfig::defaults()).expect("built-in phone patterns")
    }
}

fn keyword_alternation(keywords: &[String]) -> String {
    let mut escaped: Vec<String> = keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .map(|k| regex::escape(&k))
        .collect();
    // longest first so "telephone" is tried before "tel"
    escaped.sort_by(|a, b| b.len().cmp(&a.len()));
    escaped.join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_email() {
        let line = "Jane Doe, Director, jane.doe@example.co.uk, (555) 123-4567";
        assert_eq!(find_email(line), Some("jane.doe@example.co.uk"));
        assert_eq!(find_email("no email here"), None);
        assert_eq!(find_email("a@b.c"), None);
    }

    #[test]
    fn test_name_line() {
        assert!(is_name_line("John Allen Smith"));
        assert!(is_name_line("  Jane Doe "));
        assert!(is_name_line("José Álvarez"));
        assert!(!is_name_line("john doe"));
        assert!(!is_name_line("Jane"));
        assert!(!is_name_line("Jane Doe 2"));
        assert!(!is_name_line("Jane  Doe"));
        assert!(!is_name_line("Jane Doe, CPA"));
    }

    #[test]
    fn test_find_name_run() {
        assert_eq!(find_name_run("Meet Jane Doe here"), Some("Meet Jane Doe"));
        assert_eq!(find_name_run("contact: Jane Doe"), Some("Jane Doe"));
        assert_eq!(find_name_run("all lower case"), None);
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("(555) 123-4567"), "5551234567");
        assert_eq!(normalize_phone(" +1 (555) 123-4567"), "+15551234567");
        assert_eq!(normalize_phone("555-111-2222"), "5551112222");
    }

    #[test]
    fn test_phone_categories() {
        let phones = PhonePatterns::default();
        assert_eq!(
            phones.find("Mobile: (555) 123-4567"),
            Some((PhoneCategory::Mobile, "5551234567".to_string()))
        );
        assert_eq!(
            phones.find("Direct Line - 555 222 3333"),
            Some((PhoneCategory::Direct, "5552223333".to_string()))
        );
        assert_eq!(
            phones.find("Tel. +44 20 7946 0958"),
            Some((PhoneCategory::Office, "+442079460958".to_string()))
        );
        assert_eq!(
            phones.find("Telephone: 555-444-5555"),
            Some((PhoneCategory::Office, "5554445555".to_string()))
        );
        assert_eq!(
            phones.find("Cell Phone: 555 999 0000"),
            Some((PhoneCategory::Mobile, "5559990000".to_string()))
        );
    }

    #[test]
    fn test_phone_requires_keyword_and_length() {
        let phones = PhonePatterns::default();
        assert_eq!(phones.find("(555) 123-4567"), None);
        assert_eq!(phones.find("Office: 12-34"), None);
        assert_eq!(phones.find("Officer of the year"), None);
    }

    #[test]
    fn test_first_category_wins() {
        let phones = PhonePatterns::default();
        let line = "Office: 555-000-1111 Mobile: 555-222-3333";
        assert_eq!(
            phones.find(line),
            Some((PhoneCategory::Mobile, "5552223333".to_string()))
        );
    }

    #[test]
    fn test_mentions_keyword() {
        let phones = PhonePatterns::default();
        assert!(phones.mentions_keyword("Work"));
        assert!(phones.mentions_keyword("call my cell"));
        assert!(!phones.mentions_keyword("Director"));
    }

    #[test]
    fn test_compile_rejects_unknown_category() {
        let rules = vec![PhoneRuleConfig {
            category: "fax".to_string(),
            keywords: vec!["fax".to_string()],
        }];
        assert!(matches!(
            PhonePatterns::compile(&rules),
            Err(ExtractorError::Config(_))
        ));
    }

    #[test]
    fn test_custom_keywords_are_data() {
        let rules = vec![PhoneRuleConfig::new(PhoneCategory::Mobile, &["mob", "mobile"])];
        let phones = PhonePatterns::compile(&rules).unwrap();
        assert_eq!(
            phones.find("Mob: 07700 900123"),
            Some((PhoneCategory::Mobile, "07700900123".to_string()))
        );
        assert_eq!(phones.categories().collect::<Vec<_>>(), vec![PhoneCategory::Mobile]);
    }
}
