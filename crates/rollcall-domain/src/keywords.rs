//! Keyword set module - ordered, lower-cased vocabularies

/// Ordered set of lower-cased keywords
///
/// Entries are trimmed and lower-cased on insertion; empty entries are
/// silently dropped and duplicates collapse onto the first occurrence.
/// Membership is therefore case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    entries: Vec<String>,
}

impl KeywordSet {
    /// Create an empty keyword set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from any sequence of entries
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        set.extend(entries);
        set
    }

    /// Parse a comma-separated list, e.g. `"CEO, Director,, Manager"`
    ///
    /// Blank entries (trailing commas, doubled commas) are dropped.
    pub fn parse_list(list: &str) -> Self {
        Self::from_entries(list.split(','))
    }

    /// Insert one entry, returning `true` if it was new
    pub fn insert(&mut self, entry: &str) -> bool {
        let normalized = entry.trim().to_lowercase();
        if normalized.is_empty() || self.entries.contains(&normalized) {
            return false;
        }
        self.entries.push(normalized);
        true
    }

    /// Insert every entry of a sequence
    pub fn extend<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            self.insert(entry.as_ref());
        }
    }

    /// Case-insensitive membership test
    pub fn contains(&self, entry: &str) -> bool {
        let normalized = entry.trim().to_lowercase();
        self.entries.iter().any(|e| *e == normalized)
    }

    /// Remove every entry that exactly equals an entry of `other`
    ///
    /// This is whole-keyword subtraction, not substring: removing `"manager"`
    /// leaves `"office manager"` in place.
    pub fn subtract(&self, other: &KeywordSet) -> KeywordSet {
        KeywordSet {
            entries: self
                .entries
                .iter()
                .filter(|e| !other.entries.contains(e))
                .cloned()
                .collect(),
        }
    }

    /// Set union, keeping `self`'s order followed by new entries of `other`
    pub fn union(&self, other: &KeywordSet) -> KeywordSet {
        let mut merged = self.clone();
        merged.extend(other.iter());
        merged
    }

    /// First entry (in set order) that occurs as a substring of `text_lower`
    ///
    /// `text_lower` must already be lower-cased.
    pub fn first_substring_of(&self, text_lower: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| text_lower.contains(e.as_str()))
            .map(String::as_str)
    }

    /// Iterate entries in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Entries as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}
