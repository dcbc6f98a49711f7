//! The record of user-entered values

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use super::field::Field;

/// Heading of the confirmation shown after a clean submit
pub const SUCCESS_HEADING: &str = "Data stored successfully!";

/// Current value of every field on one form instance
///
/// Values are kept exactly as entered. Every field starts out empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormData {
    /// Applicant name
    pub name: String,
    /// Postal address
    pub address: String,
    /// Mobile number
    pub mobile: String,
    /// Email address
    pub email: String,
    /// Selected gender value (`male`, `female`, `other`)
    pub gender: String,
    /// Date of birth as entered (`YYYY-MM-DD` from a date picker)
    pub dob: String,
    /// Selected course
    pub course: String,
}

impl FormData {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of one field
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Address => &self.address,
            Field::Mobile => &self.mobile,
            Field::Email => &self.email,
            Field::Gender => &self.gender,
            Field::Dob => &self.dob,
            Field::Course => &self.course,
        }
    }

    /// Replace the value of one field, leaving the others untouched
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Address => &mut self.address,
            Field::Mobile => &mut self.mobile,
            Field::Email => &mut self.email,
            Field::Gender => &mut self.gender,
            Field::Dob => &mut self.dob,
            Field::Course => &mut self.course,
        };
        *slot = value.into();
    }

    /// Builder-style [`FormData::set`]
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Whether every field is still empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|field| self.get(field).is_empty())
    }

    /// Iterate over `(field, value)` in display order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Confirmation text listing every submitted value
    ///
    /// ```rust
    /// use admission_form::registration::{Field, FormData};
    ///
    /// let data = FormData::new().with(Field::Name, "Asha");
    /// assert!(data.summary().starts_with("Data stored successfully!\nName: Asha\n"));
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        let mut text = String::from(SUCCESS_HEADING);
        for (field, value) in self.iter() {
            let _ = write!(text, "\n{}: {}", field.summary_label(), value);
        }
        text
    }
}
