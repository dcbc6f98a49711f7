//! Error lookup used while rendering
//!
//! The renderer only needs "which message belongs under this input". Anything
//! that can answer that by field name plugs into [`FormBuilder::errors`].
//!
//! [`FormBuilder::errors`]: super::FormBuilder::errors

use std::fmt::Debug;

use crate::registration::{ErrorMap, Field};

/// Source of per-field validation messages
pub trait FieldErrors: Debug {
    /// Message to show beneath the input named `name`, if any
    fn message_for(&self, name: &str) -> Option<&str>;
}

impl FieldErrors for ErrorMap {
    fn message_for(&self, name: &str) -> Option<&str> {
        name.parse::<Field>().ok().and_then(|field| self.get(field))
    }
}
