//! Contact records - the in-progress and sealed forms

use crate::field::ContactField;

/// In-progress accumulation of contact fields
///
/// Owned by the record segmenter for the duration of one run. Fields are only
/// ever filled while empty; nothing overwrites a populated field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateRecord {
    /// Person's name
    pub name: Option<String>,
    /// Job title
    pub title: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Normalized mobile number
    pub mobile: Option<String>,
    /// Normalized direct number
    pub direct: Option<String>,
    /// Normalized office number
    pub office: Option<String>,
}

impl CandidateRecord {
    /// Create an empty candidate
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a field
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Whether a field is populated
    pub fn has(&self, field: ContactField) -> bool {
        self.get(field).is_some()
    }

    /// Whether a non-empty name has been set
    pub fn has_name(&self) -> bool {
        self.has(ContactField::Name)
    }

    /// Set a field only if it is currently empty
    ///
    /// Blank values are ignored. Returns `true` if the field was written.
    pub fn fill(&mut self, field: ContactField, value: impl Into<String>) -> bool {
        let value = value.into();
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        let slot = self.slot_mut(field);
        if slot.is_some() {
            return false;
        }
        *slot = Some(value.to_string());
        true
    }

    /// Whether no field has been populated
    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| !self.has(*f))
    }

    /// Finalize into an immutable contact record
    pub fn seal(self) -> ContactRecord {
        ContactRecord { fields: self }
    }

    fn slot(&self, field: ContactField) -> &Option<String> {
        match field {
            ContactField::Name => &self.name,
            ContactField::Title => &self.title,
            ContactField::Email => &self.email,
            ContactField::Mobile => &self.mobile,
            ContactField::Direct => &self.direct,
            ContactField::Office => &self.office,
        }
    }

    fn slot_mut(&mut self, field: ContactField) -> &mut Option<String> {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Title => &mut self.title,
            ContactField::Email => &mut self.email,
            ContactField::Mobile => &mut self.mobile,
            ContactField::Direct => &mut self.direct,
            ContactField::Office => &mut self.office,
        }
    }
}

/// A sealed contact record
///
/// Produced only by [`CandidateRecord::seal`]; read-only from then on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    fields: CandidateRecord,
}

impl ContactRecord {
    /// Read a field
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.fields.get(field)
    }

    /// Read a field, empty string when absent
    pub fn value(&self, field: ContactField) -> &str {
        self.get(field).unwrap_or("")
    }

    /// Name, if any
    pub fn name(&self) -> Option<&str> {
        self.get(ContactField::Name)
    }

    /// Title, if any
    pub fn title(&self) -> Option<&str> {
        self.get(ContactField::Title)
    }

    /// Email, if any
    pub fn email(&self) -> Option<&str> {
        self.get(ContactField::Email)
    }

    /// Mobile number, if any
    pub fn mobile(&self) -> Option<&str> {
        self.get(ContactField::Mobile)
    }

    /// Direct number, if any
    pub fn direct(&self) -> Option<&str> {
        self.get(ContactField::Direct)
    }

    /// Office number, if any
    pub fn office(&self) -> Option<&str> {
        self.get(ContactField::Office)
    }

    /// Populated fields with their values, in output order
    pub fn present_fields(&self) -> impl Iterator<Item = (ContactField, &str)> {
        ContactField::ALL
            .into_iter()
            .filter_map(move |f| self.get(f).map(|v| (f, v)))
    }
}
