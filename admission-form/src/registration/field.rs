//! Field identifiers and the fixed option lists
//!
//! The form has a closed set of seven fields. Everything that addresses a
//! field by name (HTTP bodies, error slots, rendering) goes through [`Field`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the seven registration fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Applicant name
    Name,
    /// Postal address (multi-line)
    Address,
    /// Ten digit mobile number
    Mobile,
    /// Email address
    Email,
    /// Gender selection
    Gender,
    /// Date of birth
    Dob,
    /// Course selection
    Course,
}

impl Field {
    /// Number of fields on the form
    pub const COUNT: usize = 7;

    /// All fields in display order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Name,
        Self::Address,
        Self::Mobile,
        Self::Email,
        Self::Gender,
        Self::Dob,
        Self::Course,
    ];

    /// Wire name used in form bodies and element ids
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::Mobile => "mobile",
            Self::Email => "email",
            Self::Gender => "gender",
            Self::Dob => "dob",
            Self::Course => "course",
        }
    }

    /// Label shown next to the input
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Address => "Address",
            Self::Mobile => "Mobile",
            Self::Email => "Email",
            Self::Gender => "Gender",
            Self::Dob => "Date of Birth",
            Self::Course => "Course",
        }
    }

    /// Short label used in the success summary
    #[must_use]
    pub const fn summary_label(self) -> &'static str {
        match self {
            Self::Dob => "DOB",
            other => other.label(),
        }
    }

    /// Position of this field in [`Field::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name does not identify a form field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Gender options offered by the radio group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other
    Other,
}

impl Gender {
    /// All options in display order
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    /// Submitted value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    /// Radio label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    /// Parse a submitted value, `None` for anything outside the option list
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|gender| gender.as_str() == value)
    }
}

/// Courses an applicant can register for
pub const COURSES: [&str; 4] = ["Biology", "Computer Science", "Commerce", "Humanities"];

/// Whether `value` is one of [`COURSES`]
#[must_use]
pub fn is_course(value: &str) -> bool {
    COURSES.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_round_trips_through_wire_name() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
    }

    #[test]
    fn test_unknown_field() {
        let err = "phone".parse::<Field>().unwrap_err();
        assert_eq!(err, UnknownField("phone".into()));
        assert_eq!(err.to_string(), "unknown form field: phone");
    }

    #[test]
    fn test_field_names_are_case_sensitive() {
        assert!("Name".parse::<Field>().is_err());
    }

    #[test]
    fn test_index_matches_display_order() {
        for (i, field) in Field::ALL.into_iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Field::Dob.label(), "Date of Birth");
        assert_eq!(Field::Dob.summary_label(), "DOB");
        assert_eq!(Field::Mobile.summary_label(), "Mobile");
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!(Gender::parse("female"), Some(Gender::Female));
        assert_eq!(Gender::parse("Female"), None);
        assert_eq!(Gender::parse(""), None);
    }

    #[test]
    fn test_courses() {
        assert!(is_course("Computer Science"));
        assert!(!is_course("computer science"));
        assert!(!is_course(""));
    }
}
