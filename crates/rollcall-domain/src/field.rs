//! Field module - the columns a contact record can carry

/// A field of a contact record
///
/// The declaration order is the stable output order used by every formatter:
/// Name, Title, Email, then the phone categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    /// Person's full name
    Name,

    /// Job title
    Title,

    /// Email address
    Email,

    /// Mobile / cell number
    Mobile,

    /// Direct line
    Direct,

    /// Office / switchboard number
    Office,
}

impl ContactField {
    /// All fields in output order
    pub const ALL: [ContactField; 6] = [
        ContactField::Name,
        ContactField::Title,
        ContactField::Email,
        ContactField::Mobile,
        ContactField::Direct,
        ContactField::Office,
    ];

    /// Column header for this field
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Title => "Title",
            ContactField::Email => "Email",
            ContactField::Mobile => "Mobile",
            ContactField::Direct => "Direct",
            ContactField::Office => "Office",
        }
    }

    /// Parse a field from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" => Some(ContactField::Name),
            "title" => Some(ContactField::Title),
            "email" => Some(ContactField::Email),
            "mobile" => Some(ContactField::Mobile),
            "direct" => Some(ContactField::Direct),
            "office" => Some(ContactField::Office),
            _ => None,
        }
    }

    /// The phone category backing this field, if it is a phone field
    pub fn phone_category(&self) -> Option<PhoneCategory> {
        match self {
            ContactField::Mobile => Some(PhoneCategory::Mobile),
            ContactField::Direct => Some(PhoneCategory::Direct),
            ContactField::Office => Some(PhoneCategory::Office),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContactField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid contact field: {}", s))
    }
}

/// Category of a phone number
///
/// Categories are evaluated in declaration order; when a line names more than
/// one category only the first one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PhoneCategory {
    /// Mobile / cell
    Mobile,

    /// Direct dial
    Direct,

    /// Office / main line
    Office,
}

impl PhoneCategory {
    /// All categories in evaluation order
    pub const ALL: [PhoneCategory; 3] = [
        PhoneCategory::Mobile,
        PhoneCategory::Direct,
        PhoneCategory::Office,
    ];

    /// Lower-case label, used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            PhoneCategory::Mobile => "mobile",
            PhoneCategory::Direct => "direct",
            PhoneCategory::Office => "office",
        }
    }

    /// Parse a category label
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mobile" => Some(PhoneCategory::Mobile),
            "direct" => Some(PhoneCategory::Direct),
            "office" => Some(PhoneCategory::Office),
            _ => None,
        }
    }

    /// The record field this category populates
    pub fn field(&self) -> ContactField {
        match self {
            PhoneCategory::Mobile => ContactField::Mobile,
            PhoneCategory::Direct => ContactField::Direct,
            PhoneCategory::Office => ContactField::Office,
        }
    }
}

impl std::str::FromStr for PhoneCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid phone category: {}", s))
    }
}
