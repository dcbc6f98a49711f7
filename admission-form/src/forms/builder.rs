//! Fluent form construction
//!
//! A [`FormBuilder`] collects fields through a [`FieldBuilder`] per control
//! and renders once at [`FormBuilder::build`].

use super::error::FieldErrors;
use super::field::{Choice, Control, FormField, InputType};
use super::render::FormRenderer;

/// Builder for a POST form
///
/// # Examples
///
/// ```rust
/// use admission_form::forms::{FormBuilder, InputType};
///
/// let html = FormBuilder::new("/register")
///     .input("email", InputType::Email)
///         .label("Email")
///         .required()
///         .done()
///     .submit("Register")
///     .build();
///
/// assert!(html.contains(r#"name="email""#));
/// ```
#[derive(Debug, Clone)]
pub struct FormBuilder<'a> {
    pub(crate) action: String,
    pub(crate) id: Option<String>,
    pub(crate) novalidate: bool,
    pub(crate) hx: Option<HxSwap>,
    pub(crate) errors: Option<&'a dyn FieldErrors>,
    pub(crate) fields: Vec<FormField>,
    pub(crate) submit_text: Option<String>,
    pub(crate) buttons: Vec<FormButton>,
}

/// Where HTMX posts the form and how the answer is swapped in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HxSwap {
    /// `hx-target` selector
    pub target: String,
    /// `hx-swap` strategy
    pub swap: String,
}

/// A second submit button posting the form to another URL
///
/// Rendered with `formaction` and `formnovalidate`; when the form is HTMX
/// driven it also gets its own `hx-post` with the form's target and swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormButton {
    /// Button text
    pub text: String,
    /// URL the form is posted to
    pub action: String,
}

impl<'a> FormBuilder<'a> {
    /// Form posting to `action`
    #[must_use]
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            id: None,
            novalidate: false,
            hx: None,
            errors: None,
            fields: Vec::new(),
            submit_text: None,
            buttons: Vec::new(),
        }
    }

    /// Set the form id
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Leave validation to the server
    #[must_use]
    pub const fn novalidate(mut self) -> Self {
        self.novalidate = true;
        self
    }

    /// Post through HTMX to the form action and swap the answer into `target`
    #[must_use]
    pub fn htmx(mut self, target: impl Into<String>, swap: impl Into<String>) -> Self {
        self.hx = Some(HxSwap {
            target: target.into(),
            swap: swap.into(),
        });
        self
    }

    /// Messages to show beneath the controls
    #[must_use]
    pub fn errors(mut self, errors: &'a dyn FieldErrors) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Text of the main submit button
    #[must_use]
    pub fn submit(mut self, text: impl Into<String>) -> Self {
        self.submit_text = Some(text.into());
        self
    }

    /// Add a button that posts the form to `action` instead
    #[must_use]
    pub fn button(mut self, text: impl Into<String>, action: impl Into<String>) -> Self {
        self.buttons.push(FormButton {
            text: text.into(),
            action: action.into(),
        });
        self
    }

    /// Start an `<input>`
    #[must_use]
    pub fn input(self, name: impl Into<String>, input_type: InputType) -> FieldBuilder<'a> {
        FieldBuilder::new(self, FormField::new(name, Control::Input(input_type)))
    }

    /// Start a `<textarea>` with `rows` visible lines
    #[must_use]
    pub fn textarea(self, name: impl Into<String>, rows: u32) -> FieldBuilder<'a> {
        FieldBuilder::new(self, FormField::new(name, Control::Textarea { rows }))
    }

    /// Start a `<select>`; add entries with [`FieldBuilder::option`]
    #[must_use]
    pub fn select(self, name: impl Into<String>) -> FieldBuilder<'a> {
        let control = Control::Select {
            prompt: None,
            choices: Vec::new(),
        };
        FieldBuilder::new(self, FormField::new(name, control))
    }

    /// Start a radio group; add buttons with [`FieldBuilder::option`]
    #[must_use]
    pub fn radio(self, name: impl Into<String>) -> FieldBuilder<'a> {
        let control = Control::Radio {
            choices: Vec::new(),
        };
        FieldBuilder::new(self, FormField::new(name, control))
    }

    /// Render to HTML
    #[must_use]
    pub fn build(self) -> String {
        FormRenderer::render(&self)
    }
}

/// Settings for one field; [`done`](Self::done) hands the form back
#[derive(Debug)]
pub struct FieldBuilder<'a> {
    form: FormBuilder<'a>,
    field: FormField,
}

impl<'a> FieldBuilder<'a> {
    const fn new(form: FormBuilder<'a>, field: FormField) -> Self {
        Self { form, field }
    }

    /// Label text (legend for radio groups)
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.field.label = label.into();
        self
    }

    /// Current value, or the chosen entry of a select or radio group
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.field.value = value.into();
        self
    }

    /// Emit `required`
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.field.required = true;
        self
    }

    /// Add an entry to a select or radio group; ignored for other controls
    #[must_use]
    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        if let Some(choices) = self.field.choices_mut() {
            choices.push(Choice::new(value, label));
        }
        self
    }

    /// Disabled first entry of a select, chosen while the value matches no entry
    #[must_use]
    pub fn prompt(mut self, text: impl Into<String>) -> Self {
        if let Control::Select { ref mut prompt, .. } = self.field.control {
            *prompt = Some(text.into());
        }
        self
    }

    /// `placeholder` attribute
    #[must_use]
    pub fn placeholder(self, text: impl Into<String>) -> Self {
        self.attr("placeholder", text)
    }

    /// `autocomplete` attribute
    #[must_use]
    pub fn autocomplete(self, hint: impl Into<String>) -> Self {
        self.attr("autocomplete", hint)
    }

    /// `maxlength` attribute
    #[must_use]
    pub fn max_length(self, len: usize) -> Self {
        self.attr("maxlength", len.to_string())
    }

    /// Any other attribute
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.field.attrs.push((name.into(), value.into()));
        self
    }

    /// Finish this field
    #[must_use]
    pub fn done(mut self) -> FormBuilder<'a> {
        self.form.fields.push(self.field);
        self.form
    }
}
