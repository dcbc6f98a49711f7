//! Form state machine
//!
//! ```text
//!            submit (errors)              submit (clean)
//!  Editing ─────────────────▶ Invalid ──────────────────▶ Submitted
//!     ▲  ◀── edit / cancel ─────┘                             │
//!     └───────────────────────── cancel ─────────────────────┘
//! ```
//!
//! A form instance is owned by whoever drives it; nothing here is shared.

use tracing::debug;

use super::data::FormData;
use super::field::Field;
use super::validate::{validate, ErrorMap};

/// Where a form instance currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Accepting input
    #[default]
    Editing,
    /// Last submit was rejected; messages are shown
    Invalid,
    /// Last submit was accepted; the success view is shown
    Submitted,
}

/// Result of [`FormState::submit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed
    Accepted,
    /// At least one field failed; the map holds every failure
    Rejected(ErrorMap),
}

impl SubmitOutcome {
    /// Whether the submit went through
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Values, messages and success snapshot of one form instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    data: FormData,
    errors: ErrorMap,
    stored: Option<FormData>,
    phase: Phase,
}

impl FormState {
    /// A fresh, empty form
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A form pre-filled with `data`, still in [`Phase::Editing`]
    #[must_use]
    pub fn with_data(data: FormData) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    /// Current field values
    #[must_use]
    pub const fn data(&self) -> &FormData {
        &self.data
    }

    /// Messages from the last rejected submit
    ///
    /// Edits do not clear them; only the next submit or a cancel does.
    #[must_use]
    pub const fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Values captured by the last accepted submit, shown by the success view
    #[must_use]
    pub const fn stored(&self) -> Option<&FormData> {
        self.stored.as_ref()
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the success view is visible
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        matches!(self.phase, Phase::Submitted)
    }

    /// Replace one field's value without validating it
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.data.set(field, value);
        if self.phase == Phase::Invalid {
            self.phase = Phase::Editing;
        }
    }

    /// Apply a name/value pair as it arrives in a request body
    ///
    /// Returns `false` and leaves the form untouched when `name` is not a
    /// form field.
    pub fn update_named(&mut self, name: &str, value: impl Into<String>) -> bool {
        match name.parse::<Field>() {
            Ok(field) => {
                self.update_field(field, value);
                true
            }
            Err(err) => {
                debug!(%err, "ignoring value");
                false
            }
        }
    }

    /// Validate the current values and either store the messages or accept
    pub fn submit(&mut self) -> SubmitOutcome {
        let snapshot = self.data.clone();
        let errors = validate(&snapshot);

        if errors.is_empty() {
            self.errors.clear();
            self.stored = Some(snapshot);
            self.phase = Phase::Submitted;
            SubmitOutcome::Accepted
        } else {
            self.errors = errors;
            self.phase = Phase::Invalid;
            SubmitOutcome::Rejected(errors)
        }
    }

    /// Clear every value and message and hide the success view
    pub fn cancel(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(state: &mut FormState) {
        state.update_field(Field::Name, "Asha Rao");
        state.update_field(Field::Address, "12 Hill Road");
        state.update_field(Field::Mobile, "9876543210");
        state.update_field(Field::Email, "asha@example.com");
        state.update_field(Field::Gender, "female");
        state.update_field(Field::Dob, "2008-04-01");
        state.update_field(Field::Course, "Biology");
    }

    #[test]
    fn test_starts_editing_and_empty() {
        let state = FormState::new();
        assert_eq!(state.phase(), Phase::Editing);
        assert!(state.data().is_empty());
        assert!(state.errors().is_empty());
        assert!(state.stored().is_none());
    }

    #[test]
    fn test_update_field_does_not_validate() {
        let mut state = FormState::new();
        state.update_field(Field::Mobile, "abc");
        assert!(state.errors().is_empty());
        assert_eq!(state.phase(), Phase::Editing);
        assert_eq!(state.data().mobile, "abc");
    }

    #[test]
    fn test_update_named() {
        let mut state = FormState::new();
        assert!(state.update_named("email", "a@b.c"));
        assert!(!state.update_named("_csrf", "token"));
        assert_eq!(state.data().email, "a@b.c");
        assert_eq!(state.data(), &FormData::new().with(Field::Email, "a@b.c"));
    }

    #[test]
    fn test_fill_submit_then_cancel() {
        let mut state = FormState::new();
        fill(&mut state);

        assert_eq!(state.submit(), SubmitOutcome::Accepted);
        assert!(state.errors().is_empty());
        assert!(state.is_submitted());
        assert_eq!(state.stored(), Some(state.data()));

        let stored = state.stored().unwrap();
        assert_eq!(stored.name, "Asha Rao");
        assert_eq!(stored.address, "12 Hill Road");
        assert_eq!(stored.mobile, "9876543210");
        assert_eq!(stored.email, "asha@example.com");
        assert_eq!(stored.gender, "female");
        assert_eq!(stored.dob, "2008-04-01");
        assert_eq!(stored.course, "Biology");

        state.cancel();
        assert!(state.data().is_empty());
        assert!(!state.is_submitted());
        assert!(state.stored().is_none());
        assert_eq!(state.phase(), Phase::Editing);
    }

    #[test]
    fn test_missing_course_rejects() {
        let mut state = FormState::new();
        fill(&mut state);
        state.update_field(Field::Course, "");

        let outcome = state.submit();
        let SubmitOutcome::Rejected(errors) = outcome else {
            panic!("expected rejection, got {outcome:?}");
        };
        assert_eq!(errors.fields(), vec![Field::Course]);
        assert_eq!(state.errors().get(Field::Course), Some("Please select a course"));
        assert_eq!(state.phase(), Phase::Invalid);
        assert!(state.stored().is_none());
    }

    #[test]
    fn test_errors_survive_edits_until_next_submit() {
        let mut state = FormState::new();
        assert!(!state.submit().is_accepted());
        assert_eq!(state.errors().len(), Field::COUNT);

        state.update_field(Field::Name, "Asha");
        assert_eq!(state.phase(), Phase::Editing);
        assert!(state.errors().contains(Field::Name));

        state.submit();
        assert!(!state.errors().contains(Field::Name));
        assert_eq!(state.errors().len(), Field::COUNT - 1);
    }

    #[test]
    fn test_resubmit_after_fix_clears_errors() {
        let mut state = FormState::new();
        fill(&mut state);
        state.update_field(Field::Mobile, "12345");
        assert!(!state.submit().is_accepted());

        state.update_field(Field::Mobile, "1234567890");
        assert!(state.submit().is_accepted());
        assert!(state.errors().is_empty());
    }

    #[test]
    fn test_edit_after_submit_keeps_stored_snapshot() {
        let mut state = FormState::new();
        fill(&mut state);
        state.submit();

        state.update_field(Field::Name, "Someone Else");
        assert!(state.is_submitted());
        assert_eq!(state.stored().unwrap().name, "Asha Rao");
    }

    #[test]
    fn test_rejected_resubmit_keeps_last_snapshot() {
        let mut state = FormState::new();
        fill(&mut state);
        assert!(state.submit().is_accepted());

        state.update_field(Field::Email, "bad-email");
        assert!(!state.submit().is_accepted());
        assert_eq!(state.phase(), Phase::Invalid);
        assert_eq!(state.stored().unwrap().email, "asha@example.com");
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut once = FormState::new();
        fill(&mut once);
        once.submit();
        once.cancel();

        let mut twice = once.clone();
        twice.cancel();

        assert_eq!(once, twice);
        assert_eq!(twice, FormState::new());
    }

    #[test]
    fn test_cancel_from_invalid() {
        let mut state = FormState::new();
        state.submit();
        assert_eq!(state.phase(), Phase::Invalid);

        state.cancel();
        assert_eq!(state.phase(), Phase::Editing);
        assert!(state.errors().is_empty());
    }
}
