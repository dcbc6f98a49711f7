//! Server-rendered form markup for HTMX pages
//!
//! [`FormBuilder`] describes the controls; [`FormRenderer`] turns them into
//! escaped HTML with each validation message beneath its control. Secondary
//! buttons (such as cancel) post the same form to another URL.
//!
//! ```rust
//! use admission_form::forms::{FormBuilder, InputType};
//!
//! let form = FormBuilder::new("/register")
//!     .htmx("#registration", "outerHTML")
//!     .input("mobile", InputType::Tel)
//!         .label("Mobile")
//!         .required()
//!         .max_length(10)
//!         .done()
//!     .submit("Register")
//!     .button("Cancel", "/cancel")
//!     .build();
//!
//! assert!(form.contains(r#"maxlength="10""#));
//! assert!(form.contains(r#"formaction="/cancel""#));
//! ```
//!
//! Any [`FieldErrors`] source can supply the messages; the registration
//! [`ErrorMap`](crate::registration::ErrorMap) is one:
//!
//! ```rust
//! use admission_form::forms::{FormBuilder, InputType};
//! use admission_form::registration::{validate, FormData};
//!
//! let errors = validate(&FormData::new());
//! let form = FormBuilder::new("/register")
//!     .errors(&errors)
//!     .input("name", InputType::Text)
//!         .label("Name")
//!         .done()
//!     .build();
//!
//! assert!(form.contains("Name is required"));
//! ```

mod builder;
mod error;
mod field;
mod render;

pub use builder::{FieldBuilder, FormBuilder, FormButton, HxSwap};
pub use error::FieldErrors;
pub use field::{Choice, Control, FormField, InputType};
pub use render::FormRenderer;
