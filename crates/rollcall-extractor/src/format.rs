//! Formatter: display lines and CSV payloads

use crate::config::ColumnProfile;
use rollcall_domain::{ContactField, ContactRecord};

/// Delimiter between fields of a display line
pub const DISPLAY_DELIMITER: &str = " | ";

/// One column of the comma-separated payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// A single contact field
    Field(ContactField),
    /// First present of Mobile, Direct, Office
    Phone,
}

impl Column {
    /// Header text
    pub fn header(&self) -> &'static str {
        match self {
            Column::Field(field) => field.as_str(),
            Column::Phone => "Phone",
        }
    }

    /// Cell value for `record`, empty when absent
    pub fn value<'r>(&self, record: &'r ContactRecord) -> &'r str {
        match self {
            Column::Field(field) => record.value(*field),
            Column::Phone => record
                .mobile()
                .or_else(|| record.direct())
                .or_else(|| record.office())
                .unwrap_or(""),
        }
    }
}

const FULL_COLUMNS: &[Column] = &[
    Column::Field(ContactField::Name),
    Column::Field(ContactField::Title),
    Column::Field(ContactField::Email),
    Column::Field(ContactField::Mobile),
    Column::Field(ContactField::Direct),
    Column::Field(ContactField::Office),
];

const COMBINED_PHONE_COLUMNS: &[Column] = &[
    Column::Field(ContactField::Name),
    Column::Field(ContactField::Title),
    Column::Field(ContactField::Email),
    Column::Phone,
];

const BASIC_COLUMNS: &[Column] = &[
    Column::Field(ContactField::Name),
    Column::Field(ContactField::Title),
    Column::Field(ContactField::Email),
];

impl ColumnProfile {
    /// Columns in output order
    pub fn columns(&self) -> &'static [Column] {
        match self {
            ColumnProfile::Full => FULL_COLUMNS,
            ColumnProfile::CombinedPhone => COMBINED_PHONE_COLUMNS,
            ColumnProfile::Basic => BASIC_COLUMNS,
        }
    }
}

/// Renders contact records
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactFormatter {
    profile: ColumnProfile,
}

impl ContactFormatter {
    /// Create a formatter for a column profile
    pub fn new(profile: ColumnProfile) -> Self {
        Self { profile }
    }

    /// Columns of the CSV payload
    pub fn columns(&self) -> &'static [Column] {
        self.profile.columns()
    }

    /// `Name | Title | Email` followed by each present phone as `Mobile: …`
    pub fn display_line(&self, record: &ContactRecord) -> String {
        let mut parts = vec![
            record.value(ContactField::Name).to_string(),
            record.value(ContactField::Title).to_string(),
            record.value(ContactField::Email).to_string(),
        ];
        for field in [ContactField::Mobile, ContactField::Direct, ContactField::Office] {
            if let Some(number) = record.get(field) {
                parts.push(format!("{}: {}", field, number));
            }
        }
        parts.join(DISPLAY_DELIMITER)
    }

    /// One display line per record
    pub fn display(&self, records: &[ContactRecord]) -> String {
        records
            .iter()
            .map(|r| self.display_line(r))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Header plus one comma-joined row per record
    ///
    /// Values are written verbatim; embedded commas are not quoted.
    pub fn to_csv(&self, records: &[ContactRecord]) -> String {
        let columns = self.columns();
        let mut out = columns
            .iter()
            .map(Column::header)
            .collect::<Vec<_>>()
            .join(",");
        out.push('\n');
        for record in records {
            let row = columns
                .iter()
                .map(|c| c.value(record))
                .collect::<Vec<_>>()
                .join(",");
            out.push_str(&row);
            out.push('\n');
        }
        out
    }
}
