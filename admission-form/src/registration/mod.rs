//! Registration form core: field values, validation and form state
//!
//! Everything in this module is synchronous and free of I/O. The HTTP layer
//! builds one [`FormState`] per request from the posted values and renders
//! whatever phase it ends up in.
//!
//! # Example
//!
//! ```rust
//! use admission_form::registration::{Field, FormState, Phase};
//!
//! let mut form = FormState::new();
//! form.update_field(Field::Name, "Asha Rao");
//!
//! // Everything else is still empty
//! assert!(!form.submit().is_accepted());
//! assert_eq!(form.phase(), Phase::Invalid);
//! assert_eq!(form.errors().len(), 6);
//!
//! form.cancel();
//! assert_eq!(form.phase(), Phase::Editing);
//! ```

mod data;
mod field;
mod state;
mod validate;

pub use data::{FormData, SUCCESS_HEADING};
pub use field::{is_course, Field, Gender, UnknownField, COURSES};
pub use state::{FormState, Phase, SubmitOutcome};
pub use validate::{
    check_field, validate, ErrorMap, ADDRESS_REQUIRED, COURSE_REQUIRED, DOB_REQUIRED,
    EMAIL_INVALID, GENDER_REQUIRED, MOBILE_INVALID, NAME_REQUIRED,
};
