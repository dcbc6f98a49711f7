//! Field validation
//!
//! [`validate`] checks every field independently and collects one message per
//! failing field into an [`ErrorMap`]. The mobile and email rules are shape
//! checks only and must stay exactly as lenient as they are.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::data::FormData;
use super::field::{is_course, Field, Gender};

/// Message for an empty name
pub const NAME_REQUIRED: &str = "Name is required";
/// Message for an empty address
pub const ADDRESS_REQUIRED: &str = "Address is required";
/// Message for a mobile number that is not exactly ten digits
pub const MOBILE_INVALID: &str = "Please enter a valid 10-digit mobile number";
/// Message for a value without the `x@y.z` shape
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
/// Message for a missing gender selection
pub const GENDER_REQUIRED: &str = "Gender is required";
/// Message for an empty date of birth
pub const DOB_REQUIRED: &str = "Date of birth is required";
/// Message for a missing or unknown course
pub const COURSE_REQUIRED: &str = "Please select a course";

// ASCII digits only; `\d` would also accept other Unicode digits.
static MOBILE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{10}$").unwrap_or_else(|e| unreachable!("static pattern: {e}"))
});

// Unanchored: any substring with the shape is enough.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\S+@\S+\.\S+").unwrap_or_else(|e| unreachable!("static pattern: {e}"))
});

/// Validation messages for one submit attempt, one slot per field
///
/// # Examples
///
/// ```rust
/// use admission_form::registration::{validate, Field, FormData};
///
/// let errors = validate(&FormData::new().with(Field::Mobile, "12345"));
/// assert_eq!(
///     errors.get(Field::Mobile),
///     Some("Please enter a valid 10-digit mobile number")
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorMap {
    slots: [Option<&'static str>; Field::COUNT],
}

impl ErrorMap {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the message for a field, replacing any previous one
    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.slots[field.index()] = Some(message);
    }

    /// Message for a field, if it failed
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.slots[field.index()]
    }

    /// Whether a field has a message
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// Whether no field failed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of failing fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Drop every message
    pub fn clear(&mut self) {
        self.slots = [None; Field::COUNT];
    }

    /// Iterate over failing fields in display order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|message| (field, message)))
    }

    /// Failing fields in display order
    #[must_use]
    pub fn fields(&self) -> Vec<Field> {
        self.iter().map(|(field, _)| field).collect()
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// Check one field against its rule
#[must_use]
pub fn check_field(field: Field, value: &str) -> Option<&'static str> {
    let ok = match field {
        Field::Name | Field::Address | Field::Dob => !value.is_empty(),
        Field::Mobile => MOBILE_PATTERN.is_match(value),
        Field::Email => EMAIL_PATTERN.is_match(value),
        Field::Gender => Gender::parse(value).is_some(),
        Field::Course => is_course(value),
    };

    if ok {
        None
    } else {
        Some(match field {
            Field::Name => NAME_REQUIRED,
            Field::Address => ADDRESS_REQUIRED,
            Field::Mobile => MOBILE_INVALID,
            Field::Email => EMAIL_INVALID,
            Field::Gender => GENDER_REQUIRED,
            Field::Dob => DOB_REQUIRED,
            Field::Course => COURSE_REQUIRED,
        })
    }
}

/// Validate every field and collect all failures
///
/// An empty result means the record can be submitted.
#[must_use]
pub fn validate(data: &FormData) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for (field, value) in data.iter() {
        if let Some(message) = check_field(field, value) {
            errors.insert(field, message);
        }
    }
    errors
}
