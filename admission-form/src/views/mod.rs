//! Page and fragment rendering
//!
//! Every response is built around the `#registration` fragment: the form
//! followed by the success panel while the form is in the submitted phase. HTMX
//! requests receive the fragment alone; plain requests get it inside the
//! page layout.

use askama::Template;
use axum::response::Html;

use crate::config::FormSettings;
use crate::error::AppError;
use crate::forms::{FormBuilder, InputType};
use crate::registration::{Field, FormState, Gender, COURSES};

/// Element id swapped by HTMX
pub const FRAGMENT_ID: &str = "registration";

/// Full HTML document
#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    title: &'a str,
    htmx_src: &'a str,
    content: &'a str,
}

/// The swappable `#registration` section
#[derive(Template)]
#[template(path = "registration.html")]
struct RegistrationTemplate<'a> {
    form: &'a str,
    heading: &'a str,
    stored: Option<Vec<(&'static str, String)>>,
}

/// Render the registration form for `state`, errors inline
#[must_use]
pub fn registration_form(state: &FormState) -> String {
    let data = state.data();

    let mut radio = FormBuilder::new("/register")
        .id("registration-form")
        .novalidate()
        .htmx(format!("#{FRAGMENT_ID}"), "outerHTML")
        .errors(state.errors())
        .input(Field::Name.as_str(), InputType::Text)
            .label(Field::Name.label())
            .value(data.get(Field::Name))
            .autocomplete("name")
            .required()
            .done()
        .textarea(Field::Address.as_str(), 4)
            .label(Field::Address.label())
            .value(data.get(Field::Address))
            .required()
            .done()
        .input(Field::Mobile.as_str(), InputType::Tel)
            .label(Field::Mobile.label())
            .value(data.get(Field::Mobile))
            .placeholder("10 digit number")
            .max_length(10)
            .attr("inputmode", "numeric")
            .autocomplete("tel")
            .required()
            .done()
        .input(Field::Email.as_str(), InputType::Email)
            .label(Field::Email.label())
            .value(data.get(Field::Email))
            .autocomplete("email")
            .required()
            .done()
        .radio(Field::Gender.as_str())
            .label(Field::Gender.label())
            .value(data.get(Field::Gender))
            .required();
    for gender in Gender::ALL {
        radio = radio.option(gender.as_str(), gender.label());
    }

    let mut select = radio
        .done()
        .input(Field::Dob.as_str(), InputType::Date)
            .label(Field::Dob.label())
            .value(data.get(Field::Dob))
            .required()
            .done()
        .select(Field::Course.as_str())
            .label(Field::Course.label())
            .prompt("Select a course")
            .value(data.get(Field::Course))
            .required();
    for course in COURSES {
        select = select.option(course, course);
    }

    select
        .done()
        .submit("Register")
        .button("Cancel", "/cancel")
        .build()
}

/// Render the `#registration` fragment
///
/// # Errors
///
/// Returns [`AppError::Template`] if the template fails to render.
pub fn fragment(state: &FormState, settings: &FormSettings) -> Result<String, AppError> {
    let form = registration_form(state);
    let stored = state
        .stored()
        .filter(|_| state.is_submitted())
        .map(|data| {
            data.iter()
                .map(|(field, value)| (field.summary_label(), value.to_string()))
                .collect()
        });

    let template = RegistrationTemplate {
        form: &form,
        heading: &settings.success_heading,
        stored,
    };
    Ok(template.render()?)
}

/// Render the whole page around the fragment
///
/// # Errors
///
/// Returns [`AppError::Template`] if either template fails to render.
pub fn page(state: &FormState, settings: &FormSettings) -> Result<String, AppError> {
    let content = fragment(state, settings)?;
    let template = PageTemplate {
        title: &settings.title,
        htmx_src: &settings.htmx_src,
        content: &content,
    };
    Ok(template.render()?)
}

/// Fragment for HTMX requests, full page otherwise
///
/// # Errors
///
/// Returns [`AppError::Template`] if rendering fails.
pub fn respond(
    state: &FormState,
    settings: &FormSettings,
    is_htmx: bool,
) -> Result<Html<String>, AppError> {
    let html = if is_htmx {
        fragment(state, settings)?
    } else {
        page(state, settings)?
    };
    Ok(Html(html))
}
