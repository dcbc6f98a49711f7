//! Registration form handlers
//!
//! No form is kept between requests. Each handler rebuilds a
//! [`FormState`] from the posted pairs, applies one operation, and renders.

use axum::{extract::State, response::Html, Form};
use axum_htmx::HxRequest;

use crate::error::AppError;
use crate::registration::{FormState, SubmitOutcome};
use crate::state::AppState;
use crate::views;

/// Posted `name=value` pairs in body order
pub type FormPairs = Vec<(String, String)>;

/// `GET /` - an empty form
#[allow(clippy::unused_async)]
pub async fn index(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
) -> Result<Html<String>, AppError> {
    tracing::debug!(is_htmx, "rendering empty form");
    views::respond(&FormState::new(), state.form_settings(), is_htmx)
}

/// `POST /register` - submit the posted values
///
/// Rejected submissions still answer `200 OK` so HTMX swaps the fragment
/// with the inline messages.
#[allow(clippy::unused_async)]
pub async fn register(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Form(pairs): Form<FormPairs>,
) -> Result<Html<String>, AppError> {
    let mut form = form_from_pairs(pairs);

    match form.submit() {
        SubmitOutcome::Accepted => tracing::info!("registration accepted"),
        SubmitOutcome::Rejected(errors) => {
            tracing::debug!(fields = ?errors.fields(), "registration rejected");
        }
    }

    views::respond(&form, state.form_settings(), is_htmx)
}

/// `POST /cancel` - discard everything
///
/// Posted values are ignored, so the body is never read.
#[allow(clippy::unused_async)]
pub async fn cancel(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
) -> Result<Html<String>, AppError> {
    let mut form = FormState::new();
    form.cancel();
    tracing::debug!("registration cancelled");
    views::respond(&form, state.form_settings(), is_htmx)
}

/// Build a form from request pairs; later duplicates win, unknown names are dropped
pub fn form_from_pairs(pairs: FormPairs) -> FormState {
    let mut form = FormState::new();
    for (name, value) in pairs {
        form.update_named(&name, value);
    }
    form
}
