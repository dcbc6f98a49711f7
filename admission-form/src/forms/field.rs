//! Controls the registration form is made of

/// `type` attribute of an `<input>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    /// Single line of text
    Text,
    /// Email address
    Email,
    /// Telephone number
    Tel,
    /// Calendar date
    Date,
}

impl InputType {
    /// Attribute value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Date => "date",
        }
    }
}

/// One entry of a select or radio group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Submitted value
    pub value: String,
    /// Visible text
    pub label: String,
}

impl Choice {
    /// Choice with distinct value and label
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Which element a field renders as
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// `<input type=..>`
    Input(InputType),
    /// `<textarea rows=..>`
    Textarea {
        /// Visible lines
        rows: u32,
    },
    /// `<select>` led by a disabled prompt option
    Select {
        /// Text of the prompt option, shown while nothing valid is chosen
        prompt: Option<String>,
        /// Selectable entries
        choices: Vec<Choice>,
    },
    /// Radio buttons inside a `<fieldset>`
    Radio {
        /// One button per entry
        choices: Vec<Choice>,
    },
}

/// A named control with its label, current value and extra attributes
///
/// The element id is the field name; radio buttons use `{name}_{value}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Name posted with the form
    pub name: String,
    /// Label text (a legend for radio groups)
    pub label: String,
    /// Element kind
    pub control: Control,
    /// Current value; for select and radio, the chosen entry
    pub value: String,
    /// Emit the `required` attribute
    pub required: bool,
    /// Additional attributes in insertion order
    pub attrs: Vec<(String, String)>,
}

impl FormField {
    /// Empty field of the given kind
    #[must_use]
    pub fn new(name: impl Into<String>, control: Control) -> Self {
        Self {
            name: name.into(),
            label: String::new(),
            control,
            value: String::new(),
            required: false,
            attrs: Vec::new(),
        }
    }

    /// Entries of a select or radio group, empty for other controls
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        match &self.control {
            Control::Select { choices, .. } | Control::Radio { choices } => choices,
            Control::Input(_) | Control::Textarea { .. } => &[],
        }
    }

    /// Whether the current value is one of the entries
    #[must_use]
    pub fn has_chosen(&self) -> bool {
        self.choices().iter().any(|c| c.value == self.value)
    }

    pub(crate) fn choices_mut(&mut self) -> Option<&mut Vec<Choice>> {
        match &mut self.control {
            Control::Select { choices, .. } | Control::Radio { choices } => Some(choices),
            Control::Input(_) | Control::Textarea { .. } => None,
        }
    }
}
