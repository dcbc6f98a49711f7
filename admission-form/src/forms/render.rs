//! HTML output for a [`FormBuilder`]
//!
//! Every text and attribute value is escaped. A field with a message gets the
//! error class, `aria-invalid`, and an `aria-describedby` pointing at the
//! message span below it.

use std::fmt::Write;

use super::builder::{FormBuilder, FormButton, HxSwap};
use super::field::{Choice, Control, FormField, InputType};

const GROUP_CLASS: &str = "form-group";
const LABEL_CLASS: &str = "form-label";
const INPUT_CLASS: &str = "form-input";
const INPUT_ERROR_CLASS: &str = "form-input form-input-error";
const ERROR_CLASS: &str = "form-error";
const RADIO_CLASS: &str = "form-radio";
const ACTIONS_CLASS: &str = "form-actions";
const SUBMIT_CLASS: &str = "form-submit";
const BUTTON_CLASS: &str = "form-button";

/// Renders forms to HTML
pub struct FormRenderer;

impl FormRenderer {
    /// Render `form` as a `<form>` element
    #[must_use]
    pub fn render(form: &FormBuilder<'_>) -> String {
        let mut html = String::with_capacity(4096);

        html.push_str("<form");
        push_attr(&mut html, "action", &form.action);
        push_attr(&mut html, "method", "post");
        if let Some(ref id) = form.id {
            push_attr(&mut html, "id", id);
        }
        if form.novalidate {
            html.push_str(" novalidate");
        }
        if let Some(ref hx) = form.hx {
            push_hx(&mut html, &form.action, hx);
        }
        html.push_str(">\n");

        for field in &form.fields {
            let message = form.errors.and_then(|e| e.message_for(&field.name));
            Self::render_field(&mut html, field, message);
        }

        if form.submit_text.is_some() || !form.buttons.is_empty() {
            let _ = writeln!(html, r#"  <div class="{ACTIONS_CLASS}">"#);
            if let Some(ref text) = form.submit_text {
                let _ = write!(html, r#"    <button type="submit" class="{SUBMIT_CLASS}">"#);
                push_escaped(&mut html, text);
                html.push_str("</button>\n");
            }
            for button in &form.buttons {
                Self::render_button(&mut html, button, form.hx.as_ref());
            }
            html.push_str("  </div>\n");
        }

        html.push_str("</form>");
        html
    }

    fn render_field(html: &mut String, field: &FormField, message: Option<&str>) {
        let is_radio = matches!(field.control, Control::Radio { .. });

        if is_radio {
            let _ = write!(html, r#"  <fieldset class="{GROUP_CLASS}""#);
            push_attr(html, "id", &field.name);
            let _ = write!(html, ">\n    <legend class=\"{LABEL_CLASS}\">");
            push_escaped(html, &field.label);
            html.push_str("</legend>\n");
        } else {
            let _ = writeln!(html, r#"  <div class="{GROUP_CLASS}">"#);
            html.push_str("    <label");
            push_attr(html, "for", &field.name);
            let _ = write!(html, r#" class="{LABEL_CLASS}">"#);
            push_escaped(html, &field.label);
            html.push_str("</label>\n");
        }

        match &field.control {
            Control::Input(input_type) => Self::render_input(html, field, *input_type, message),
            Control::Textarea { rows } => Self::render_textarea(html, field, *rows, message),
            Control::Select { prompt, choices } => {
                Self::render_select(html, field, prompt.as_deref(), choices, message);
            }
            Control::Radio { choices } => Self::render_radio(html, field, choices, message),
        }

        if let Some(message) = message {
            let _ = write!(html, r#"    <span class="{ERROR_CLASS}""#);
            push_attr(html, "id", &format!("{}-error", field.name));
            html.push('>');
            push_escaped(html, message);
            html.push_str("</span>\n");
        }

        html.push_str(if is_radio { "  </fieldset>\n" } else { "  </div>\n" });
    }

    fn render_input(html: &mut String, field: &FormField, input_type: InputType, message: Option<&str>) {
        html.push_str("    <input");
        push_attr(html, "type", input_type.as_str());
        push_attr(html, "name", &field.name);
        push_attr(html, "id", &field.name);
        push_control_state(html, field, message);
        push_attr(html, "value", &field.value);
        push_extra_attrs(html, field);
        html.push_str(">\n");
    }

    fn render_textarea(html: &mut String, field: &FormField, rows: u32, message: Option<&str>) {
        html.push_str("    <textarea");
        push_attr(html, "name", &field.name);
        push_attr(html, "id", &field.name);
        push_control_state(html, field, message);
        push_attr(html, "rows", &rows.to_string());
        push_extra_attrs(html, field);
        // The parser drops one newline right after the start tag
        html.push_str(">\n");
        push_escaped(html, &field.value);
        html.push_str("</textarea>\n");
    }

    fn render_select(
        html: &mut String,
        field: &FormField,
        prompt: Option<&str>,
        choices: &[Choice],
        message: Option<&str>,
    ) {
        html.push_str("    <select");
        push_attr(html, "name", &field.name);
        push_attr(html, "id", &field.name);
        push_control_state(html, field, message);
        push_extra_attrs(html, field);
        html.push_str(">\n");

        if let Some(prompt) = prompt {
            html.push_str(r#"      <option value="" disabled"#);
            if !field.has_chosen() {
                html.push_str(" selected");
            }
            html.push('>');
            push_escaped(html, prompt);
            html.push_str("</option>\n");
        }

        for choice in choices {
            html.push_str("      <option");
            push_attr(html, "value", &choice.value);
            if choice.value == field.value {
                html.push_str(" selected");
            }
            html.push('>');
            push_escaped(html, &choice.label);
            html.push_str("</option>\n");
        }

        html.push_str("    </select>\n");
    }

    fn render_radio(html: &mut String, field: &FormField, choices: &[Choice], message: Option<&str>) {
        let class = if message.is_some() { INPUT_ERROR_CLASS } else { INPUT_CLASS };

        for (i, choice) in choices.iter().enumerate() {
            let id = format!("{}_{}", field.name, choice.value);
            let _ = write!(html, "    <span class=\"{RADIO_CLASS}\">\n      <input");
            push_attr(html, "type", "radio");
            push_attr(html, "name", &field.name);
            push_attr(html, "id", &id);
            push_attr(html, "value", &choice.value);
            push_attr(html, "class", class);
            if choice.value == field.value {
                html.push_str(" checked");
            }
            // One required button makes the whole group required
            if field.required && i == 0 {
                html.push_str(" required");
            }
            html.push_str(">\n      <label");
            push_attr(html, "for", &id);
            html.push('>');
            push_escaped(html, &choice.label);
            html.push_str("</label>\n    </span>\n");
        }
    }

    fn render_button(html: &mut String, button: &FormButton, hx: Option<&HxSwap>) {
        let _ = write!(html, r#"    <button type="submit" class="{BUTTON_CLASS}""#);
        push_attr(html, "formaction", &button.action);
        html.push_str(" formnovalidate");
        if let Some(hx) = hx {
            push_hx(html, &button.action, hx);
        }
        html.push('>');
        push_escaped(html, &button.text);
        html.push_str("</button>\n");
    }
}

/// Class, `required` and error wiring shared by input, textarea and select
fn push_control_state(html: &mut String, field: &FormField, message: Option<&str>) {
    if message.is_some() {
        push_attr(html, "class", INPUT_ERROR_CLASS);
    } else {
        push_attr(html, "class", INPUT_CLASS);
    }
    if field.required {
        html.push_str(" required");
    }
    if message.is_some() {
        push_attr(html, "aria-invalid", "true");
        push_attr(html, "aria-describedby", &format!("{}-error", field.name));
    }
}

fn push_extra_attrs(html: &mut String, field: &FormField) {
    for (name, value) in &field.attrs {
        push_attr(html, name, value);
    }
}

fn push_hx(html: &mut String, url: &str, hx: &HxSwap) {
    push_attr(html, "hx-post", url);
    push_attr(html, "hx-target", &hx.target);
    push_attr(html, "hx-swap", &hx.swap);
}

fn push_attr(html: &mut String, name: &str, value: &str) {
    html.push(' ');
    html.push_str(name);
    html.push_str("=\"");
    push_escaped(html, value);
    html.push('"');
}

/// Escape for both text content and double-quoted attribute values
fn push_escaped(html: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => html.push_str("&amp;"),
            '<' => html.push_str("&lt;"),
            '>' => html.push_str("&gt;"),
            '"' => html.push_str("&quot;"),
            '\'' => html.push_str("&#39;"),
            other => html.push(other),
        }
    }
}
